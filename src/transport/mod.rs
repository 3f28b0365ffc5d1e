mod error;
mod file;
mod smtp;

pub use error::Error;
pub use file::FileTransport;
pub use smtp::Smtp;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Body, Mailbox, MultiPart, SinglePart};

use crate::message::Message;

/// Delivers a composed message. Implementations decide what delivery
/// means: a network hop, a file on disk, or a test recorder.
pub trait Transport: std::fmt::Debug {
    fn send(&self, message: &Message) -> Result<(), Error>;
}

/// Convert a composed message into a full MIME message: an alternative
/// text/html part followed by one part per attachment.
pub(crate) fn to_mime(message: &Message) -> Result<lettre::Message, Error> {
    let builder = lettre::Message::builder()
        .from(message.from.parse::<Mailbox>()?)
        .to(message.to.parse::<Mailbox>()?)
        .subject(message.subject.clone());

    let content = match (&message.text_body, &message.html_body) {
        (Some(text), Some(html)) => MultiPart::alternative_plain_html(text.clone(), html.clone()),
        (Some(text), None) => MultiPart::alternative().singlepart(SinglePart::plain(text.clone())),
        (None, Some(html)) => MultiPart::alternative().singlepart(SinglePart::html(html.clone())),
        (None, None) => MultiPart::alternative().singlepart(SinglePart::plain(String::new())),
    };

    let mut mixed = MultiPart::mixed().multipart(content);

    for attachment in &message.attachments {
        let content_type = attachment
            .content_type
            .parse::<ContentType>()
            .map_err(|e| Error::Message(e.to_string()))?;

        mixed = mixed.singlepart(
            Attachment::new(attachment.file_name.clone())
                .body(Body::new(attachment.data.clone()), content_type),
        );
    }

    Ok(builder.multipart(mixed)?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mime_contains_bodies_and_attachments() {
        let mut message = Message::new();
        message
            .set_from("a@x.com")
            .set_subject("Subj")
            .set_to("b@x.com");
        message.text_body = Some("plain".to_string());
        message.html_body = Some("<p>html</p>".to_string());
        message.attach_content(b"data".to_vec(), "foo.txt", "text/plain");

        let mime = to_mime(&message).unwrap();
        let formatted = String::from_utf8(mime.formatted()).unwrap();

        assert!(formatted.contains("Subject: Subj"));
        assert!(formatted.contains("<p>html</p>"));
        assert!(formatted.contains("foo.txt"));
        assert!(formatted.contains("Content-Disposition: attachment"));
    }

    #[test]
    fn bad_address_is_an_error() {
        let mut message = Message::new();
        message.set_from("not an address").set_to("b@x.com");

        assert!(matches!(to_mime(&message), Err(Error::Address(_))));
    }

    #[test]
    fn bad_content_type_is_an_error() {
        let mut message = Message::new();
        message.set_from("a@x.com").set_to("b@x.com");
        message.attach_content(b"data".to_vec(), "foo.bin", "not a mime type");

        assert!(matches!(to_mime(&message), Err(Error::Message(_))));
    }
}

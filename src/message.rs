use serde::{Deserialize, Serialize};

/// A composed message being prepared for the transport.
///
/// Built up by the composer and the dispatch service during a single send,
/// then handed to the transport as a whole.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub subject: String,

    /// Plaintext body, if any
    pub text_body: Option<String>,

    /// HTML body, if any
    pub html_body: Option<String>,

    /// Attachments, in the order they were added
    pub attachments: Vec<Attachment>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment data
    pub data: Vec<u8>,

    /// Attachment filename
    pub file_name: String,

    /// MIME type of attachment (e.g., text/plain)
    pub content_type: String,
}

impl Message {
    pub fn new() -> Message {
        Default::default()
    }

    pub fn set_from(&mut self, from: impl Into<String>) -> &mut Self {
        self.from = from.into();
        self
    }

    pub fn set_to(&mut self, to: impl Into<String>) -> &mut Self {
        self.to = to.into();
        self
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = subject.into();
        self
    }

    /// Append an attachment. Order of calls is preserved on the wire.
    pub fn attach_content(
        &mut self,
        data: Vec<u8>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> &mut Self {
        self.attachments.push(Attachment {
            data,
            file_name: file_name.into(),
            content_type: content_type.into(),
        });
        self
    }
}

impl Attachment {
    /// Attachment size, in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn setters_chain() {
        let mut message = Message::new();
        message
            .set_from("a@x.com")
            .set_subject("Subj")
            .set_to("b@x.com");

        assert_eq!(message.from, "a@x.com");
        assert_eq!(message.to, "b@x.com");
        assert_eq!(message.subject, "Subj");
    }

    #[test]
    fn attachments_keep_input_order() {
        let mut message = Message::new();
        message
            .attach_content(b"one".to_vec(), "one.txt", "text/plain")
            .attach_content(b"two".to_vec(), "two.png", "image/png");

        assert_eq!(message.attachments.len(), 2);
        assert_eq!(message.attachments[0].file_name, "one.txt");
        assert_eq!(message.attachments[1].content_type, "image/png");
        assert_eq!(message.attachments[1].size(), 3);
    }
}

use serde::{Deserialize, Serialize};

use crate::flash::FlashConfig;

/// Notification published after a send attempt. The service gives up
/// ownership on publish; whoever listens keeps the event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MailEvent {
    Sent(MessageSent),
    NotSent(MessageNotSent),
}

/// Flash payload for a delivered message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageSent {
    /// Presentation type tag (e.g., "success")
    pub kind: String,
    pub header: String,
    pub body: String,
    pub add_flash: bool,
}

/// Flash payload for a failed delivery. The body carries the transport
/// error text verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageNotSent {
    /// Presentation type tag (e.g., "danger")
    pub kind: String,
    pub header: String,
    pub body: String,
    pub add_flash: bool,
}

impl MessageSent {
    pub fn new(
        kind: impl Into<String>,
        header: impl Into<String>,
        body: impl Into<String>,
        add_flash: bool,
    ) -> Self {
        Self {
            kind: kind.into(),
            header: header.into(),
            body: body.into(),
            add_flash,
        }
    }
}

impl MessageNotSent {
    pub fn new(
        kind: impl Into<String>,
        header: impl Into<String>,
        body: impl Into<String>,
        add_flash: bool,
    ) -> Self {
        Self {
            kind: kind.into(),
            header: header.into(),
            body: body.into(),
            add_flash,
        }
    }

    /// Shorthand for the call sites that only know the error text; the
    /// presentation fields fall back to the failure defaults.
    pub fn with_error(error: impl Into<String>) -> Self {
        let flash = FlashConfig::default();
        Self::new(flash.kind_not_sent, flash.header, error, flash.add_flash)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn with_error_uses_failure_defaults() {
        let event = MessageNotSent::with_error("smtp down");

        assert_eq!(event.kind, "danger");
        assert_eq!(event.header, "System mailer notification.");
        assert_eq!(event.body, "smtp down");
        assert!(event.add_flash);
    }
}

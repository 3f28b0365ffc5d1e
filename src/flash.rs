/// Presentation metadata stamped onto the notification events, so a UI
/// listener can render a flash message without knowing mail internals.
///
/// Built once with the fluent setters and handed to the service; it is
/// read-only from then on.
#[derive(Clone, Debug, PartialEq)]
pub struct FlashConfig {
    /// Whether listeners should surface a flash message at all
    pub add_flash: bool,

    /// Type tag for `MessageSent` (e.g., "success")
    pub kind_sent: String,

    /// Type tag for `MessageNotSent` (e.g., "danger")
    pub kind_not_sent: String,

    pub header: String,
    pub body: String,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            add_flash: true,
            kind_sent: "success".to_string(),
            kind_not_sent: "danger".to_string(),
            header: "System mailer notification.".to_string(),
            body: "Your message has been sent.".to_string(),
        }
    }
}

impl FlashConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_flash(mut self, add_flash: bool) -> Self {
        self.add_flash = add_flash;
        self
    }

    pub fn kind_sent(mut self, kind: impl Into<String>) -> Self {
        self.kind_sent = kind.into();
        self
    }

    pub fn kind_not_sent(mut self, kind: impl Into<String>) -> Self {
        self.kind_not_sent = kind.into();
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn documented_defaults() {
        let flash = FlashConfig::new();

        assert!(flash.add_flash);
        assert_eq!(flash.kind_sent, "success");
        assert_eq!(flash.kind_not_sent, "danger");
        assert_eq!(flash.header, "System mailer notification.");
        assert_eq!(flash.body, "Your message has been sent.");
    }

    #[test]
    fn setters_chain_and_last_write_wins() {
        let flash = FlashConfig::new()
            .kind_sent("info")
            .kind_sent("x")
            .header("Mailer")
            .body("Done.")
            .add_flash(false);

        assert_eq!(flash.kind_sent, "x");
        assert_eq!(flash.header, "Mailer");
        assert_eq!(flash.body, "Done.");
        assert!(!flash.add_flash);
    }
}

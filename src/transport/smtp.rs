use lettre::transport::smtp::authentication::Credentials;
use lettre::Transport as _;

use super::{to_mime, Error, Transport};
use crate::message::Message;

/// SMTP delivery backed by lettre.
#[derive(Debug)]
pub struct Smtp {
    mailer: lettre::SmtpTransport,
}

impl Smtp {
    /// TLS connection to a relay host on the standard submission port.
    pub fn relay(host: &str) -> Result<Self, Error> {
        Ok(Self {
            mailer: lettre::SmtpTransport::relay(host)?.build(),
        })
    }

    pub fn relay_with_credentials(
        host: &str,
        username: &str,
        password: &str,
        port: u16,
    ) -> Result<Self, Error> {
        let credentials = Credentials::new(username.to_string(), password.to_string());

        Ok(Self {
            mailer: lettre::SmtpTransport::relay(host)?
                .credentials(credentials)
                .port(port)
                .build(),
        })
    }

    /// Plaintext connection to a local MTA on port 25.
    pub fn unencrypted_localhost() -> Self {
        Self {
            mailer: lettre::SmtpTransport::unencrypted_localhost(),
        }
    }
}

impl Transport for Smtp {
    fn send(&self, message: &Message) -> Result<(), Error> {
        let mime = to_mime(message)?;
        self.mailer.send(&mime)?;

        log::debug!("message relayed for {}", message.to);
        Ok(())
    }
}

use std::error;
use std::fmt;

/// Error type for mail transports.
/// Display yields the underlying message text so logs and notification
/// events carry it verbatim.
#[derive(Clone, Debug)]
pub enum Error {
    /// Malformed sender or recipient address
    Address(String),
    /// The message could not be assembled into MIME form
    Message(String),
    /// SMTP connection or delivery failure
    Smtp(String),
    /// Storage-write failure for file-based transports
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Address(ref msg) => f.write_str(msg),
            Error::Message(ref msg) => f.write_str(msg),
            Error::Smtp(ref msg) => f.write_str(msg),
            Error::Io(ref msg) => f.write_str(msg),
        }
    }
}

impl error::Error for Error {}

impl From<lettre::address::AddressError> for Error {
    fn from(err: lettre::address::AddressError) -> Self {
        Self::Address(err.to_string())
    }
}

impl From<lettre::error::Error> for Error {
    fn from(err: lettre::error::Error) -> Self {
        Self::Message(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for Error {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::Smtp(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

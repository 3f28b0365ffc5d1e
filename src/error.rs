use crate::transport;

/// All possible Courier library errors.
///
/// Transport failures during a send are handled inside the dispatch path
/// (logged and turned into a `false` result); the variants here are the
/// ones `run` actually propagates, plus construction-time failures.
#[derive(Debug)]
pub enum Error {
    /// Unregistered or malformed symbolic path
    Alias(String),
    /// A view template could not be loaded or rendered
    Template(String),
    /// An upload stream could not be read
    Upload(String),
    /// Bad or missing configuration key
    Config(String),
    /// Transport construction failure
    Transport(transport::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::Alias(ref msg) => write!(f, "{}", msg),
            Error::Template(ref msg) => write!(f, "template: {}", msg),
            Error::Upload(ref msg) => write!(f, "upload: {}", msg),
            Error::Config(ref msg) => write!(f, "config: {}", msg),
            Error::Transport(ref e) => write!(f, "transport: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<transport::Error> for Error {
    fn from(err: transport::Error) -> Self {
        Error::Transport(err)
    }
}

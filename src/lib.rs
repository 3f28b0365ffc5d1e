//! Templated mail dispatch.
//!
//! Composes an email from named view templates and parameters, attaches
//! uploaded files, sends the result through a pluggable transport, and
//! publishes a `MessageSent`/`MessageNotSent` event describing the outcome.

pub mod aliases;
pub mod compose;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod flash;
pub mod message;
pub mod service;
pub mod transport;
pub mod upload;

pub use aliases::Aliases;
pub use compose::{Composer, TemplateComposer};
pub use dispatch::{Dispatcher, Publish};
pub use error::Error;
pub use event::{MailEvent, MessageNotSent, MessageSent};
pub use flash::FlashConfig;
pub use message::{Attachment, Message};
pub use service::{MailerService, SendRequest};
pub use transport::Transport;
pub use upload::{UploadStatus, UploadedFile};

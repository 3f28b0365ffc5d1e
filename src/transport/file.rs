use std::fs;
use std::path::PathBuf;

use chrono::offset::Utc;
use uuid::Uuid;

use super::{to_mime, Error, Transport};
use crate::message::Message;

/// Writes each message to a directory as a raw `.eml` file instead of
/// delivering it. Used for local development and tests.
#[derive(Debug)]
pub struct FileTransport {
    dir: PathBuf,
}

impl FileTransport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn message_path(&self) -> PathBuf {
        let name = format!(
            "{}-{}.eml",
            Utc::now().format("%Y%m%d-%H%M%S"),
            Uuid::new_v4()
        );
        self.dir.join(name)
    }
}

impl Transport for FileTransport {
    fn send(&self, message: &Message) -> Result<(), Error> {
        let mime = to_mime(message)?;

        fs::create_dir_all(&self.dir)?;
        let path = self.message_path();
        fs::write(&path, mime.formatted())?;

        log::debug!("message written to {}", path.display());
        Ok(())
    }
}

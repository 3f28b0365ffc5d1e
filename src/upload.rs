use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::Path;

/// Status code attached to an uploaded file by the upload layer.
/// Mirrors the usual web-server upload error set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UploadStatus {
    Ok,
    IniSizeExceeded,
    FormSizeExceeded,
    Partial,
    NoFile,
    NoTmpDir,
    CantWrite,
    Extension,
}

/// One candidate attachment handed in by the caller.
///
/// Only files with `UploadStatus::Ok` end up attached to the outgoing
/// message; anything else is skipped silently.
pub struct UploadedFile {
    pub status: UploadStatus,

    /// Client-supplied file name
    pub file_name: String,

    /// Client-supplied media type (e.g., text/plain)
    pub content_type: String,

    stream: Box<dyn Read + Send>,
}

impl UploadedFile {
    pub fn new(
        stream: Box<dyn Read + Send>,
        status: UploadStatus,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            status,
            file_name: file_name.into(),
            content_type: content_type.into(),
            stream,
        }
    }

    /// Wrap an in-memory buffer as an upload handle.
    pub fn from_bytes(
        data: Vec<u8>,
        status: UploadStatus,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self::new(Box::new(Cursor::new(data)), status, file_name, content_type)
    }

    /// Open a file on disk as an upload handle.
    /// The file name is taken from the last path component.
    pub fn from_path(
        path: impl AsRef<Path>,
        status: UploadStatus,
        content_type: impl Into<String>,
    ) -> io::Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(
            Box::new(File::open(path)?),
            status,
            file_name,
            content_type,
        ))
    }

    /// Drain the underlying stream.
    pub fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut data = Vec::new();
        self.stream.read_to_end(&mut data)?;
        Ok(data)
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("status", &self.status)
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .finish()
    }
}

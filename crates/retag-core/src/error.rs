use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The tagging library could not identify the container.
    #[error("unsupported file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("cannot determine MIME type of the cover image: {}", path.display())]
    UnknownMimeType { path: PathBuf },

    /// Cover embedding has no implementation for this container. Never fatal
    /// to an edit; surfaced as a skipped cover instead.
    #[error("cover image addition not supported for this file format: {}", path.display())]
    UnsupportedCoverFormat { path: PathBuf },

    #[error("no writable tag for {}", path.display())]
    NoWritableTag { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("tag error: {0}")]
    Tag(#[from] lofty::error::LoftyError),
}

impl Error {
    /// Returns `true` when the error leaves the rest of an edit intact.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnsupportedCoverFormat { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for discovery, renaming and front-end validation.
//!
//! Tag I/O has its own error type, [`crate::tags::TagError`], because tag
//! failures are reported but never abort a pass.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The target directory is missing, not a directory, or cannot be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Deleting an existing target or moving the source failed.
    #[error("cannot rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The album name cannot be used as part of a file name.
    #[error("invalid album name: {0}")]
    InvalidAlbum(String),

    /// Settings that cannot be turned into a working tag store.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Directory {
            path: path.into(),
            source,
        }
    }
}

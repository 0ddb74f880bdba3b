//! Reading and writing the track/album tags embedded in audio files.
//!
//! The reconciliation engine only sees the [`TagStore`] trait. Two stores are
//! provided: [`LoftyTagStore`] edits ID3 tags in-process, [`CommandTagStore`]
//! delegates to an external helper program.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{TagBackend, TagSettings};

mod command;
#[cfg(test)]
pub(crate) mod memory;
mod native;

pub use command::CommandTagStore;
pub use native::LoftyTagStore;
#[cfg(test)]
pub(crate) use native::silent_mp3;

/// Tag values read from a file before any change is made to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingTags {
    pub track_number: Option<u32>,
    pub album: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Error)]
pub enum TagError {
    /// The file could not be opened or parsed.
    #[error("failed to read tags from {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// The tag could not be updated or saved.
    #[error("failed to write tags to {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    /// The helper program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The helper program ran and reported a failure.
    #[error("{0}")]
    Command(String),
}

/// Capability to inspect and update the tags of one file.
///
/// `read_tags` never fails: anything that goes wrong while reading is
/// reported as "no tags". `write_tags` failures carry a human-readable detail.
pub trait TagStore {
    fn read_tags(&self, path: &Path) -> ExistingTags;

    fn write_tags(&self, path: &Path, track_number: u32, album: &str) -> Result<(), TagError>;
}

/// Build the tag store selected in the settings.
pub fn store_from_settings(
    settings: &TagSettings,
) -> crate::error::Result<Box<dyn TagStore + Send>> {
    match settings.backend {
        TagBackend::Native => Ok(Box::new(LoftyTagStore)),
        TagBackend::Command => {
            let program = settings.program.trim();
            if program.is_empty() {
                return Err(crate::error::Error::Config(
                    "tags.program must be set when tags.backend = \"command\"".to_string(),
                ));
            }
            Ok(Box::new(CommandTagStore::new(program, settings.script.clone())))
        }
    }
}

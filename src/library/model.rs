use std::path::{Path, PathBuf};

use crate::tags::ExistingTags;

/// Where a candidate's track number came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrackSource {
    Filename,
    Tag,
}

/// A numbered audio file found during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub track_number: u32,
    pub track_source: TrackSource,
    pub existing_tags: ExistingTags,
}

impl CandidateFile {
    /// The same candidate after its file was moved to `path`.
    ///
    /// The tag snapshot is carried over unchanged; it still describes the
    /// file's contents as they were before the pass touched it.
    pub fn moved_to(self, path: PathBuf) -> Self {
        Self { path, ..self }
    }

    pub fn file_name(&self) -> String {
        file_name_of(&self.path)
    }
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

//! In-memory tag store used by the discovery and engine tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{ExistingTags, TagError, TagStore};

#[derive(Default)]
pub struct MemoryTagStore {
    tags: RefCell<HashMap<PathBuf, ExistingTags>>,
    writes: RefCell<Vec<(PathBuf, u32, String)>>,
    fail_writes: bool,
}

impl MemoryTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every write fails.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn set(&self, path: impl Into<PathBuf>, track_number: Option<u32>, album: Option<&str>) {
        self.tags.borrow_mut().insert(
            path.into(),
            ExistingTags {
                track_number,
                album: album.map(str::to_string),
                title: None,
            },
        );
    }

    pub fn get(&self, path: &Path) -> ExistingTags {
        self.tags.borrow().get(path).cloned().unwrap_or_default()
    }

    pub fn writes(&self) -> Vec<(PathBuf, u32, String)> {
        self.writes.borrow().clone()
    }
}

impl TagStore for MemoryTagStore {
    fn read_tags(&self, path: &Path) -> ExistingTags {
        self.get(path)
    }

    fn write_tags(&self, path: &Path, track_number: u32, album: &str) -> Result<(), TagError> {
        if self.fail_writes {
            return Err(TagError::Command("Error: disk is read-only".to_string()));
        }
        self.writes
            .borrow_mut()
            .push((path.to_path_buf(), track_number, album.to_string()));
        let mut tags = self.tags.borrow_mut();
        let entry = tags.entry(path.to_path_buf()).or_default();
        entry.track_number = Some(track_number);
        entry.album = Some(album.to_string());
        Ok(())
    }
}

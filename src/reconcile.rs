//! The reconciliation engine: decide and apply renames and tag updates.
//!
//! [`process_directory`] is the entry point. It never fails; every problem
//! ends up as a line in the log sink and, where it counts, in
//! [`ProcessingResult::errors`].

use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::library::discover;
use crate::tags::TagStore;

mod apply;
mod plan;
mod result;
mod sink;

pub use apply::apply;
pub use result::ProcessingResult;
pub use sink::LogSink;

/// Logged when a directory holds no numbered audio files.
pub const NO_NUMBERED_FILES: &str = "No numbered MP3 files found (looking for files starting with numbers like 1.mp3, 001_title.mp3, etc.)";

/// Run one full pass over `dir`: discover, then rename and retag.
pub fn process_directory(
    dir: &Path,
    album: &str,
    store: &dyn TagStore,
    sink: &mut dyn LogSink,
) -> ProcessingResult {
    info!("processing {} as album {:?}", dir.display(), album);

    let candidates = match discover(dir, store) {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!("{e}");
            sink.log(format!("Error processing directory: {e}"));
            return ProcessingResult {
                errors: 1,
                ..ProcessingResult::default()
            };
        }
    };

    if candidates.is_empty() {
        sink.log(NO_NUMBERED_FILES.to_string());
        return ProcessingResult::default();
    }

    sink.log(format!("Found {} numbered MP3 files", candidates.len()));
    let result = apply(candidates, album, store, sink);

    info!(
        "done: {} renamed, {} tags updated, {} errors",
        result.files_renamed, result.tags_updated, result.errors
    );
    result
}

/// Trim an album name and check that it can be used inside a file name.
pub fn validate_album(raw: &str) -> Result<String> {
    let album = raw.trim();
    if album.is_empty() {
        return Err(Error::InvalidAlbum("album name is empty".to_string()));
    }
    if album.contains(['/', '\\', '\0']) {
        return Err(Error::InvalidAlbum(format!(
            "{album:?} contains a path separator"
        )));
    }
    Ok(album.to_string())
}

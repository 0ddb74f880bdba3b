use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::tags::TagStore;

use super::model::{CandidateFile, TrackSource};

/// The only extension treated as audio (compared case-insensitively).
pub const AUDIO_EXTENSION: &str = "mp3";

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(AUDIO_EXTENSION))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.as_encoded_bytes().starts_with(b"."))
        .unwrap_or(false)
}

/// Parse the run of ASCII digits at the very start of a file stem.
///
/// `"001_chapter"` gives `Some(1)`, `"42"` gives `Some(42)`, `"intro"` gives
/// `None`. Width is irrelevant; a run too large for `u32` yields `None`.
pub fn leading_track_number(stem: &str) -> Option<u32> {
    let end = stem
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(stem.len());
    if end == 0 {
        return None;
    }
    stem[..end].parse().ok()
}

/// Pick the authoritative track number: the filename wins, the tag is a fallback.
pub fn resolve_track_number(
    from_filename: Option<u32>,
    from_tag: Option<u32>,
) -> Option<(u32, TrackSource)> {
    match (from_filename, from_tag) {
        (Some(n), _) => Some((n, TrackSource::Filename)),
        (None, Some(n)) => Some((n, TrackSource::Tag)),
        (None, None) => None,
    }
}

/// List the numbered `.mp3` files directly inside `dir`, sorted by track number.
///
/// Hidden entries and subdirectories are skipped. Ties keep file-name order.
/// Existing tags are read once per audio file through `store`.
pub fn discover(dir: &Path, store: &dyn TagStore) -> Result<Vec<CandidateFile>> {
    let meta = fs::metadata(dir).map_err(|e| Error::directory(dir, e))?;
    if !meta.is_dir() {
        return Err(Error::directory(
            dir,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut candidates: Vec<CandidateFile> = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 means the directory itself could not be listed.
            Err(e) if e.depth() == 0 => return Err(Error::directory(dir, e.into())),
            Err(e) => {
                warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if is_hidden(path) || !entry.file_type().is_file() || !is_audio_file(path) {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        let from_filename = leading_track_number(&stem);
        let existing_tags = store.read_tags(path);

        let Some((track_number, track_source)) =
            resolve_track_number(from_filename, existing_tags.track_number)
        else {
            debug!("no track number for {}, leaving it alone", path.display());
            continue;
        };

        debug!(
            "candidate {} -> track {} ({:?})",
            path.display(),
            track_number,
            track_source
        );

        candidates.push(CandidateFile {
            path: path.to_path_buf(),
            track_number,
            track_source,
            existing_tags,
        });
    }

    candidates.sort_by_key(|c| c.track_number);
    Ok(candidates)
}

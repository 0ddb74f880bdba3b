use std::fs;
use std::io;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Error;
use crate::library::{CandidateFile, TrackSource, file_name_of};
use crate::tags::TagStore;

use super::plan::Plan;
use super::result::{ProcessingResult, Tally};
use super::sink::LogSink;

/// One-line summary of what discovery found for a file.
fn status_line(candidate: &CandidateFile, album: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    let source = match candidate.track_source {
        TrackSource::Filename => "filename",
        TrackSource::Tag => "tags",
    };
    parts.push(format!("Track {} from {source}", candidate.track_number));

    let tags = &candidate.existing_tags;
    parts.push(match tags.track_number {
        Some(t) if t == candidate.track_number => "tags match".to_string(),
        Some(t) => format!("tag shows {t}"),
        None => "no track in tags".to_string(),
    });
    parts.push(match tags.album.as_deref() {
        Some(a) if a == album => "album correct".to_string(),
        Some(a) => format!("album: '{a}'"),
        None => "no album".to_string(),
    });

    format!("{}: {}", candidate.file_name(), parts.join(", "))
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Move `from` to `to`, deleting whatever already sits at `to`.
///
/// Returns whether an existing file was replaced. When `to` resolves to the
/// source itself (case-only rename on a case-insensitive filesystem) nothing
/// is deleted.
fn rename_over(from: &Path, to: &Path) -> Result<bool, Error> {
    let rename_error = |source: io::Error| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let mut replaced = false;
    if to.exists() && !is_same_file(from, to) {
        fs::remove_file(to).map_err(rename_error)?;
        replaced = true;
    }
    fs::rename(from, to).map_err(rename_error)?;
    Ok(replaced)
}

/// Rename and retag each candidate in order.
///
/// Candidates are processed one at a time. A failed rename is counted as an
/// error and skips that file's tag update; a failed tag write is only logged.
/// Nothing here aborts the pass.
pub fn apply(
    candidates: Vec<CandidateFile>,
    album: &str,
    store: &dyn TagStore,
    sink: &mut dyn LogSink,
) -> ProcessingResult {
    let mut tally = Tally::default();

    for candidate in candidates {
        let name = candidate.file_name();
        sink.log(status_line(&candidate, album));

        let plan = Plan::for_candidate(&candidate, album);
        if plan.is_noop() {
            sink.log(format!("Already correct: {name}"));
            continue;
        }

        let current = if plan.needs_rename {
            let target = candidate.path.with_file_name(&plan.target_name);
            match rename_over(&candidate.path, &target) {
                Ok(replaced) => {
                    if replaced {
                        sink.log(format!("Replaced existing: {}", plan.target_name));
                    }
                    info!("renamed {} -> {}", candidate.path.display(), target.display());
                    sink.log(format!("Renamed: {name} -> {}", plan.target_name));
                    tally.renamed();
                    candidate.moved_to(target)
                }
                Err(e) => {
                    warn!("{e}");
                    let detail = match &e {
                        Error::Rename { source, .. } => source.to_string(),
                        other => other.to_string(),
                    };
                    sink.log(format!("Failed to rename {name}: {detail}"));
                    tally.error();
                    continue;
                }
            }
        } else {
            candidate
        };

        let current_name = file_name_of(&current.path);
        if !plan.needs_tag_update {
            sink.log(format!("Tags already correct: {current_name}"));
            continue;
        }

        match store.write_tags(&current.path, current.track_number, album) {
            Ok(()) => {
                sink.log(format!(
                    "Updated tags: {current_name} -> Track #{}",
                    current.track_number
                ));
                tally.tagged();
            }
            Err(e) => {
                warn!("tag update failed for {}: {e}", current.path.display());
                sink.log(format!("Tag update failed: {current_name} - {e}"));
            }
        }
    }

    tally.finish()
}

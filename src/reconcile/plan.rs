use crate::library::CandidateFile;

/// Minimum width of the zero-padded track number in target file names.
pub const TRACK_PAD_WIDTH: usize = 3;

/// Zero-pad a track number to at least three digits.
///
/// Numbers wider than that keep their natural representation.
pub fn padded_track_number(track_number: u32) -> String {
    format!("{track_number:0width$}", width = TRACK_PAD_WIDTH)
}

/// The canonical file name for a track: `"<NNN> <album>.mp3"`.
pub fn target_filename(track_number: u32, album: &str) -> String {
    format!("{} {album}.mp3", padded_track_number(track_number))
}

/// What has to happen to one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub target_name: String,
    pub needs_rename: bool,
    pub needs_tag_update: bool,
}

impl Plan {
    pub fn for_candidate(candidate: &CandidateFile, album: &str) -> Self {
        let target_name = target_filename(candidate.track_number, album);
        let needs_rename = candidate
            .path
            .file_name()
            .is_none_or(|name| name != target_name.as_str());
        let tags = &candidate.existing_tags;
        let needs_tag_update = tags.track_number != Some(candidate.track_number)
            || tags.album.as_deref() != Some(album);

        Self {
            target_name,
            needs_rename,
            needs_tag_update,
        }
    }

    pub fn is_noop(&self) -> bool {
        !self.needs_rename && !self.needs_tag_update
    }
}

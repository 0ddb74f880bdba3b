/// Counters for one processing pass.
///
/// Produced once, at the end of a pass. Tag-write failures are reported in
/// the log but deliberately not included in `errors`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    pub files_renamed: usize,
    pub tags_updated: usize,
    pub errors: usize,
}

/// Increment-only accumulator behind a [`ProcessingResult`].
#[derive(Debug, Default)]
pub(crate) struct Tally {
    files_renamed: usize,
    tags_updated: usize,
    errors: usize,
}

impl Tally {
    pub fn renamed(&mut self) {
        self.files_renamed += 1;
    }

    pub fn tagged(&mut self) {
        self.tags_updated += 1;
    }

    pub fn error(&mut self) {
        self.errors += 1;
    }

    pub fn finish(self) -> ProcessingResult {
        ProcessingResult {
            files_renamed: self.files_renamed,
            tags_updated: self.tags_updated,
            errors: self.errors,
        }
    }
}

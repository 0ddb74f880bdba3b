use std::borrow::Cow;
use std::path::Path;

use lofty::config::WriteOptions;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::Tag;
use tracing::debug;

use super::{ExistingTags, TagError, TagStore};

/// Tag store backed by `lofty`, editing the file's primary tag in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagStore;

fn non_empty(value: Option<Cow<'_, str>>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(Cow::into_owned)
}

impl LoftyTagStore {
    fn try_read(path: &Path) -> Result<ExistingTags, TagError> {
        let tagged_file = Probe::open(path)
            .and_then(|probe| probe.read())
            .map_err(|e| TagError::Read {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let Some(tag) = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
        else {
            return Ok(ExistingTags::default());
        };

        Ok(ExistingTags {
            track_number: tag.track(),
            album: non_empty(tag.album()),
            title: non_empty(tag.title()),
        })
    }
}

impl TagStore for LoftyTagStore {
    fn read_tags(&self, path: &Path) -> ExistingTags {
        match Self::try_read(path) {
            Ok(tags) => tags,
            Err(e) => {
                debug!("{e}; treating as untagged");
                ExistingTags::default()
            }
        }
    }

    fn write_tags(&self, path: &Path, track_number: u32, album: &str) -> Result<(), TagError> {
        let write_error = |reason: String| TagError::Write {
            path: path.to_path_buf(),
            reason,
        };

        // Cover art is parsed too so it survives the rewrite of the tag.
        let mut tagged_file = Probe::open(path)
            .and_then(|probe| probe.read())
            .map_err(|e| write_error(e.to_string()))?;

        let tag_type = tagged_file.primary_tag_type();
        if tagged_file.tag(tag_type).is_none() {
            tagged_file.insert_tag(Tag::new(tag_type));
        }
        let tag = tagged_file
            .tag_mut(tag_type)
            .ok_or_else(|| write_error(format!("file does not support {tag_type:?} tags")))?;

        tag.set_track(track_number);
        tag.set_album(album.to_string());

        tag.save_to_path(path, WriteOptions::default())
            .map_err(|e| write_error(e.to_string()))?;

        debug!(
            "wrote track {} / album {:?} to {}",
            track_number,
            album,
            path.display()
        );
        Ok(())
    }
}

/// `count` silent MPEG-1 Layer III frames (128 kbit/s, 44.1 kHz), enough for
/// `lofty` to accept the file as MP3.
#[cfg(test)]
pub(crate) fn silent_mp3(count: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(count * 417);
    for _ in 0..count {
        bytes.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        bytes.extend_from_slice(&[0u8; 413]);
    }
    bytes
}

//! Discovery of numbered audio files and track-number resolution.
//!
//! A directory is scanned one level deep; every `.mp3` file gets a track
//! number from the leading digits of its name or, failing that, from its
//! embedded tag. Files with neither are not candidates and are left alone.

mod model;
mod scan;

pub use model::*;
pub use scan::*;

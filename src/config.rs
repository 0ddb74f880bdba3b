//! Configuration loader and schema types.
//!
//! This module exposes the settings that pick the tag backend and shape the
//! console output, plus helpers to load them from disk and environment.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;

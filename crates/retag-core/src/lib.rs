//! Core of retag.
//!
//! Reads and rewrites title, artist, album, date and cover art tags on audio
//! files. All container parsing and writing is delegated to `lofty`; this
//! crate decides which fields to touch and how covers are embedded per
//! container.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod paths;

pub use config::Config;
pub use editor::{apply_edit, embed_cover, read_tags, EditOptions};
pub use error::{Error, Result};
pub use model::{CoverImage, CoverOutcome, CoverTarget, EditReport, TagEdit, TagField, TagSet};
pub use paths::expand_home;

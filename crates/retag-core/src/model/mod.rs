pub mod cover;
pub mod edit;
pub mod field;
pub mod tag_set;

pub use cover::{CoverImage, CoverTarget, DEFAULT_COVER_DESCRIPTION};
pub use edit::{CoverOutcome, EditReport, TagEdit};
pub use field::TagField;
pub use tag_set::{format_values, PictureSummary, TagSet};

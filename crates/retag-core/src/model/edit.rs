use std::path::PathBuf;

use crate::model::{CoverTarget, TagField};

/// Requested changes to one audio file.
///
/// Empty strings are treated as "not requested", so a caller can pass
/// optional CLI values straight through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEdit {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub cover: Option<PathBuf>,
}

impl TagEdit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    #[must_use]
    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    #[must_use]
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    #[must_use]
    pub fn cover(mut self, cover: impl Into<PathBuf>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    /// Non-empty field values, in title/artist/album/date order.
    pub fn fields(&self) -> impl Iterator<Item = (TagField, &str)> {
        [
            (TagField::Title, &self.title),
            (TagField::Artist, &self.artist),
            (TagField::Album, &self.album),
            (TagField::Date, &self.year),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (field, v))
        })
    }

    /// The cover path, unless it is empty.
    #[must_use]
    pub fn cover_path(&self) -> Option<&std::path::Path> {
        self.cover
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// `true` when nothing would be written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none() && self.cover_path().is_none()
    }
}

/// What happened to a requested cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverOutcome {
    NotRequested,
    Embedded(CoverTarget),
    /// The container has no cover embedding; the rest of the edit was kept.
    Skipped,
}

/// Result of a successful edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditReport {
    pub fields: Vec<TagField>,
    pub cover: CoverOutcome,
    pub saved: bool,
}

impl EditReport {
    #[must_use]
    pub fn unchanged() -> Self {
        Self {
            fields: Vec::new(),
            cover: CoverOutcome::NotRequested,
            saved: false,
        }
    }
}

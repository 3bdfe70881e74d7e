use lofty::prelude::ItemKey;
use std::fmt;

/// A tag field the editor knows how to overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagField {
    Title,
    Artist,
    Album,
    Date,
}

impl TagField {
    pub const ALL: [Self; 4] = [Self::Title, Self::Artist, Self::Album, Self::Date];

    /// The generic library key this field is stored under.
    #[must_use]
    pub fn item_key(self) -> ItemKey {
        match self {
            Self::Title => ItemKey::TrackTitle,
            Self::Artist => ItemKey::TrackArtist,
            Self::Album => ItemKey::AlbumTitle,
            Self::Date => ItemKey::RecordingDate,
        }
    }

    /// Name used when listing tags.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Date => "date",
        }
    }

    /// Reverse of [`TagField::item_key`].
    #[must_use]
    pub fn from_item_key(key: &ItemKey) -> Option<Self> {
        Self::ALL.into_iter().find(|field| &field.item_key() == key)
    }
}

impl fmt::Display for TagField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use lofty::picture::{MimeType, Picture, PictureType};
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Description stored with embedded covers unless configured otherwise.
pub const DEFAULT_COVER_DESCRIPTION: &str = "Cover";

/// How a container takes a new cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverTarget {
    /// ID3v2 APIC frame, added next to any existing pictures.
    Mp3,
    /// FLAC PICTURE block, replacing all existing pictures.
    Flac,
    Unsupported,
}

impl CoverTarget {
    /// Pick the target from the audio file's extension, ignoring case.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension() else {
            return Self::Unsupported;
        };

        match ext.to_string_lossy().to_lowercase().as_str() {
            "mp3" => Self::Mp3,
            "flac" => Self::Flac,
            _ => Self::Unsupported,
        }
    }
}

impl fmt::Display for CoverTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mp3 => f.write_str("ID3v2 picture frame"),
            Self::Flac => f.write_str("FLAC picture block"),
            Self::Unsupported => f.write_str("unsupported"),
        }
    }
}

/// Cover image bytes read from disk, ready to embed as a front cover.
#[derive(Clone, PartialEq, Eq)]
pub struct CoverImage {
    mime_type: String,
    description: String,
    data: Vec<u8>,
}

impl CoverImage {
    /// Resolve the MIME type from the file name, then read the whole file.
    pub fn load(path: &Path, description: impl Into<String>) -> Result<Self> {
        let mime_type = mime_guess::from_path(path)
            .first()
            .ok_or_else(|| Error::UnknownMimeType {
                path: path.to_path_buf(),
            })?;

        let data = std::fs::read(path)?;
        log::debug!(
            "Loaded cover {} ({}, {} bytes)",
            path.display(),
            mime_type,
            data.len()
        );

        Ok(Self {
            mime_type: mime_type.essence_str().to_string(),
            description: description.into(),
            data,
        })
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Build the library picture, typed as the front cover.
    #[must_use]
    pub fn into_picture(self) -> Picture {
        Picture::new_unchecked(
            PictureType::CoverFront,
            Some(MimeType::from_str(&self.mime_type)),
            Some(self.description),
            self.data,
        )
    }
}

impl fmt::Debug for CoverImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverImage")
            .field("mime_type", &self.mime_type)
            .field("description", &self.description)
            .field("data", &format_args!("{} bytes", self.data.len()))
            .finish()
    }
}

//! Reading and editing tags through `lofty`.
//!
//! Every operation opens the file, works on the in-memory tag and, for
//! edits, writes it back with a single save. Nothing touches the disk until
//! every requested change has been applied, so a failure part way through
//! leaves the file as it was.

use lofty::config::WriteOptions;
use lofty::file::{AudioFile, TaggedFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::Tag;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{
    CoverImage, CoverOutcome, CoverTarget, EditReport, TagEdit, TagSet,
    DEFAULT_COVER_DESCRIPTION,
};

/// Knobs for [`apply_edit`] that do not come from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOptions {
    /// Description stored with an embedded cover.
    pub cover_description: String,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            cover_description: DEFAULT_COVER_DESCRIPTION.to_string(),
        }
    }
}

impl From<&Config> for EditOptions {
    fn from(config: &Config) -> Self {
        Self {
            cover_description: config.cover_description.clone(),
        }
    }
}

/// Open an audio file, sniffing its content before trusting the extension.
pub fn open(path: &Path) -> Result<TaggedFile> {
    let probe = Probe::open(path)?.guess_file_type()?;

    let Some(file_type) = probe.file_type() else {
        return Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    };
    log::debug!("Opening {} as {:?}", path.display(), file_type);

    Ok(probe.read()?)
}

/// Read the tags of `path` without modifying it.
///
/// Lists the primary tag, or the first tag present when the container's
/// preferred tag type is missing. A file without tags yields an empty set.
pub fn read_tags(path: &Path) -> Result<TagSet> {
    let tagged_file = open(path)?;

    let tag_set = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag())
        .map(TagSet::from_tag)
        .unwrap_or_default();

    log::debug!("Read {} tag keys from {}", tag_set.len(), path.display());
    Ok(tag_set)
}

/// Apply `edit` to `path` and save.
///
/// Each requested field replaces all prior values for that field. Fields not
/// named in `edit` are left untouched. A cover on a container without
/// embedding support is skipped and reported in [`EditReport::cover`];
/// the other edits are still saved.
pub fn apply_edit(path: &Path, edit: &TagEdit, options: &EditOptions) -> Result<EditReport> {
    if edit.is_empty() {
        log::info!("No edits requested for {}, leaving it untouched", path.display());
        return Ok(EditReport::unchanged());
    }

    let mut tagged_file = open(path)?;

    let cover = edit
        .cover_path()
        .map(|cover_path| CoverImage::load(cover_path, options.cover_description.as_str()))
        .transpose()?;

    let tag = writable_tag(&mut tagged_file, path)?;

    let mut fields = Vec::new();
    for (field, value) in edit.fields() {
        if tag.insert_text(field.item_key(), value.to_string()) {
            log::debug!("Set {} = {:?}", field, value);
            fields.push(field);
        } else {
            log::warn!(
                "{:?} tags cannot hold a {} field, skipping",
                tag.tag_type(),
                field
            );
        }
    }

    let cover = match cover {
        None => CoverOutcome::NotRequested,
        Some(cover) => match embed_cover(tag, path, cover) {
            Ok(target) => CoverOutcome::Embedded(target),
            Err(e) if e.is_recoverable() => {
                log::warn!("{}", e);
                CoverOutcome::Skipped
            }
            Err(e) => return Err(e),
        },
    };

    tagged_file.save_to_path(path, WriteOptions::default())?;
    log::info!("Saved tags to {}", path.display());

    Ok(EditReport {
        fields,
        cover,
        saved: true,
    })
}

/// Attach `cover` to `tag` the way the container at `audio_path` expects.
///
/// MP3 covers are added alongside existing pictures. FLAC covers replace all
/// existing pictures. Other containers fail with
/// [`Error::UnsupportedCoverFormat`] and leave `tag` unchanged.
pub fn embed_cover(tag: &mut Tag, audio_path: &Path, cover: CoverImage) -> Result<CoverTarget> {
    let target = CoverTarget::from_path(audio_path);

    match target {
        CoverTarget::Mp3 => {
            tag.push_picture(cover.into_picture());
        }
        CoverTarget::Flac => {
            while tag.picture_count() > 0 {
                tag.remove_picture(0);
            }
            tag.push_picture(cover.into_picture());
        }
        CoverTarget::Unsupported => {
            return Err(Error::UnsupportedCoverFormat {
                path: audio_path.to_path_buf(),
            });
        }
    }

    log::debug!(
        "Embedded cover as {} ({} pictures now)",
        target,
        tag.picture_count()
    );
    Ok(target)
}

/// The container's primary tag, created when missing.
///
/// Edits never fall back to a secondary tag: a lone ID3v1 tag in an MP3 has
/// no picture slot and truncates text, so a fresh ID3v2 tag is added instead
/// and the ID3v1 tag is left as it was.
fn writable_tag<'a>(tagged_file: &'a mut TaggedFile, path: &Path) -> Result<&'a mut Tag> {
    let tag_type = tagged_file.primary_tag_type();

    if tagged_file.tag(tag_type).is_none() {
        log::info!(
            "No {:?} tag found in {}, creating one",
            tag_type,
            path.display()
        );
        tagged_file.insert_tag(Tag::new(tag_type));
    }

    tagged_file
        .tag_mut(tag_type)
        .ok_or_else(|| Error::NoWritableTag {
            path: path.to_path_buf(),
        })
}

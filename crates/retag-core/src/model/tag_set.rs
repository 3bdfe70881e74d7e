use lofty::picture::{Picture, PictureType};
use lofty::tag::{ItemKey, ItemValue, Tag};
use std::fmt;

use crate::model::TagField;

/// An embedded picture as seen when listing tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureSummary {
    pub pic_type: PictureType,
    pub mime_type: Option<String>,
    pub description: Option<String>,
    pub size: usize,
}

impl From<&Picture> for PictureSummary {
    fn from(picture: &Picture) -> Self {
        Self {
            pic_type: picture.pic_type(),
            mime_type: picture.mime_type().map(|m| m.as_str().to_string()),
            description: picture.description().map(str::to_string),
            size: picture.data().len(),
        }
    }
}

impl fmt::Display for PictureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type {} ({}, {} bytes",
            self.pic_type.as_u8(),
            self.mime_type.as_deref().unwrap_or("unknown"),
            self.size
        )?;
        if let Some(description) = &self.description {
            write!(f, ", '{description}'")?;
        }
        f.write_str(")")
    }
}

/// Tag names mapped to their values, in the order the library reports them.
///
/// Keys that appear several times in the underlying tag are folded into one
/// entry, keeping the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    entries: Vec<(String, Vec<String>)>,
    pictures: Vec<PictureSummary>,
}

impl TagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a library tag.
    #[must_use]
    pub fn from_tag(tag: &Tag) -> Self {
        let mut set = Self::new();

        for item in tag.items() {
            let value = match item.value() {
                ItemValue::Text(text) | ItemValue::Locator(text) => text.clone(),
                ItemValue::Binary(bytes) => format!("<{} bytes>", bytes.len()),
            };
            set.push(key_name(item.key()), value);
        }

        set.pictures = tag.pictures().iter().map(PictureSummary::from).collect();
        set
    }

    /// Append a value under `name`, creating the entry if needed.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((name, vec![value])),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
    }

    #[must_use]
    pub fn field(&self, field: TagField) -> Option<&[String]> {
        self.get(field.name())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    #[must_use]
    pub fn pictures(&self) -> &[PictureSummary] {
        &self.pictures
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render values the way the listing prints them: `['a', 'b']`.
#[must_use]
pub fn format_values(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{v}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn key_name(key: &ItemKey) -> String {
    if let Some(field) = TagField::from_item_key(key) {
        return field.name().to_string();
    }

    match key {
        ItemKey::Unknown(raw) => raw.to_lowercase(),
        other => format!("{other:?}").to_lowercase(),
    }
}

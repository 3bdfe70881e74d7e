use anyhow::{Context, Result};
use retag_core::model::format_values;
use retag_core::{read_tags, TagSet};
use std::path::Path;

/// Print every tag of `path`. Errors are reported, never propagated.
pub fn list_tags(path: &Path) {
    match load(path) {
        Ok(tags) => {
            for line in render(path, &tags) {
                println!("{}", line);
            }
        }
        Err(e) => println!("An error occurred: {:#}", e),
    }
}

fn load(path: &Path) -> Result<TagSet> {
    read_tags(path).with_context(|| format!("Failed to read tags from {}", path.display()))
}

fn render(path: &Path, tags: &TagSet) -> Vec<String> {
    let mut lines = vec![format!("Tags for {}:", path.display())];

    lines.extend(
        tags.entries()
            .map(|(name, values)| format!("{}: {}", name, format_values(values))),
    );

    if !tags.pictures().is_empty() {
        lines.push(String::from("pictures:"));
        lines.extend(tags.pictures().iter().map(|picture| format!("  {}", picture)));
    }

    lines
}

use anyhow::{Context, Result};
use retag_core::{apply_edit, Config, CoverOutcome, EditOptions, EditReport, TagEdit};
use std::path::Path;

/// Apply `edit` to `path` and report the outcome. Errors are reported,
/// never propagated.
pub fn edit_tags(path: &Path, edit: &TagEdit, config: &Config) {
    let options = EditOptions::from(config);

    match run(path, edit, &options) {
        Ok(report) => {
            for line in summary(path, &report) {
                println!("{}", line);
            }
        }
        Err(e) => println!("An error occurred: {:#}", e),
    }
}

fn run(path: &Path, edit: &TagEdit, options: &EditOptions) -> Result<EditReport> {
    apply_edit(path, edit, options)
        .with_context(|| format!("Failed to update tags for {}", path.display()))
}

fn summary(path: &Path, report: &EditReport) -> Vec<String> {
    if !report.saved {
        return vec![format!("No changes requested for {}", path.display())];
    }

    let mut lines = Vec::new();
    if report.cover == CoverOutcome::Skipped {
        lines.push(format!(
            "Cover image addition not supported for this file format: {}",
            path.display()
        ));
    }
    lines.push(format!("Tags updated successfully for {}", path.display()));
    lines
}

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
///
/// `~user` forms and paths without a leading `~` are returned unchanged, as
/// is everything when the home directory cannot be determined.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();

    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

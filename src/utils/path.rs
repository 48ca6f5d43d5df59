//! Path utilities: expand ~ in user-supplied storage paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~` and return the path as an owned string.
pub fn resolve(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

//! Platform data locations.
//!
//! Preferences and logs live in the per-user data directory:
//! `~/.local/share/oculus` on Linux, `~/Library/Application Support/dev.oculus.oculus`
//! on macOS and `%APPDATA%\oculus\oculus\data` on Windows.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Directory used when the platform reports no home directory.
const FALLBACK_DATA_DIR: &str = ".oculus";

/// Returns the data directory for OCULUS storage.
///
/// Falls back to `./.oculus` when no home directory can be determined, for
/// example inside minimal containers.
///
/// # Examples
///
/// ```
/// use oculus::infrastructure::data_dir;
///
/// let preferences = data_dir().join("preferences.json");
/// assert!(preferences.ends_with("preferences.json"));
/// assert!(preferences.parent().is_some_and(|dir| !dir.as_os_str().is_empty()));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    ProjectDirs::from("dev", "oculus", "oculus").map_or_else(
        || {
            tracing::debug!("no home directory; using local data directory");
            PathBuf::from(FALLBACK_DATA_DIR)
        },
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use oculus::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path").to_str(), Some("/absolute/path"));
/// assert!(!expand_tilde("~/badges.toml").starts_with("~"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(base) = BaseDirs::new() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        base.home_dir().to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        base.home_dir().join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_absolute_or_local_fallback() {
        let dir = data_dir();
        assert!(dir.is_absolute() || dir == PathBuf::from(FALLBACK_DATA_DIR));
    }

    #[test]
    fn tilde_expands_only_as_prefix() {
        assert_eq!(expand_tilde("a/~/b"), PathBuf::from("a/~/b"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
        if let Some(base) = BaseDirs::new() {
            assert_eq!(expand_tilde("~"), base.home_dir());
            assert_eq!(expand_tilde("~/x"), base.home_dir().join("x"));
        }
    }
}

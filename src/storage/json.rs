//! JSON file-based preference storage.
//!
//! Preferences live in one small, human-readable JSON document written with
//! atomic replaces (write-to-temp + rename) so a crash never leaves a torn
//! file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "theme": "dark",
//!     "primaryApp": "mimir"
//!   }
//! }
//! ```

use crate::domain::error::{OculusError, Result};
use crate::storage::backend::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name used inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file preference store.
///
/// The whole document is held in memory and rewritten on every change.
#[derive(Debug)]
pub struct JsonPreferenceStore {
    file_path: PathBuf,
    data: PreferenceData,
}

impl JsonPreferenceStore {
    /// Opens the store at `file_path`, creating parent directories.
    ///
    /// A missing file starts empty. A file that cannot be parsed is logged and
    /// treated as empty too, so a corrupted preference never blocks startup;
    /// the next write replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`OculusError::Io`] if the parent directory cannot be created
    /// or an existing file cannot be read. Unparsable contents are not an
    /// error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use oculus::storage::{JsonPreferenceStore, PreferenceStore};
    /// use std::path::PathBuf;
    ///
    /// let store = JsonPreferenceStore::open(PathBuf::from("/tmp/oculus/preferences.json"))?;
    /// let theme = store.get("theme")?;
    /// # Ok::<(), oculus::OculusError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            let contents = std::fs::read_to_string(&file_path)?;
            Self::parse(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = ?file_path, error = %e, "ignoring corrupted preferences");
                PreferenceData::default()
            })
        } else {
            tracing::debug!("no preference file yet");
            PreferenceData::default()
        };

        tracing::debug!(entries = data.entries.len(), "preference store ready");

        Ok(Self { file_path, data })
    }

    /// Location of the preferences file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn parse(contents: &str) -> Result<PreferenceData> {
        let data: PreferenceData = serde_json::from_str(contents)
            .map_err(|e| OculusError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version != FORMAT_VERSION {
            tracing::debug!(version = data.version, "loading preferences from other format version");
        }
        Ok(data)
    }

    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| OculusError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!(path = ?self.file_path, "preferences saved");
        Ok(())
    }

    /// Applies `change` and saves, rolling the in-memory copy back if the
    /// save fails so memory never runs ahead of disk.
    fn write_through(&mut self, change: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let previous = self.data.entries.clone();
        change(&mut self.data.entries);

        if previous == self.data.entries {
            return Ok(());
        }

        self.save_to_file().map_err(|e| {
            self.data.entries = previous;
            e
        })
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key = %key, value = %value).entered();
        self.write_through(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove_preference", key = %key).entered();
        self.write_through(|entries| {
            entries.remove(key);
        })
    }
}

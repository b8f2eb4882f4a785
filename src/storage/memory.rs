//! In-memory preference storage for tests and embedding hosts.

use crate::domain::error::{OculusError, Result};
use crate::storage::backend::PreferenceStore;
use std::collections::BTreeMap;

/// Preference store backed by a map.
///
/// `read_only` makes every write fail, which lets callers exercise their
/// best-effort persistence paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryPreferenceStore {
    /// Creates an empty, writable store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the given entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            read_only: false,
        }
    }

    /// Makes every subsequent write fail with [`OculusError::Storage`].
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    fn check_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(OculusError::Storage("store is read-only".to_string()));
        }
        Ok(())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.entries.remove(key);
        Ok(())
    }
}

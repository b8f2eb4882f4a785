//! Preference storage abstraction.
//!
//! The dashboards persist a handful of string preferences (`theme`,
//! `primaryApp`). The [`PreferenceStore`] trait keeps the context layer
//! independent of where they live: a JSON file for desktop sessions, memory
//! for tests and embedding.

use crate::domain::error::Result;

/// Key under which the explicit theme choice is stored.
pub const THEME_KEY: &str = "theme";

/// Key under which the explicitly selected application is stored.
pub const PRIMARY_APP_KEY: &str = "primaryApp";

/// Abstraction over persisted client storage.
///
/// A missing key is a normal state, not an error.
pub trait PreferenceStore {
    /// Reads a stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the previous value is kept.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes a value. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

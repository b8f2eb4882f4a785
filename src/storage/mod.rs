//! Persisted client storage for dashboard preferences.
//!
//! # Modules
//!
//! - `backend`: [`PreferenceStore`] trait and well-known keys
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: Map-backed implementation

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::{PreferenceStore, PRIMARY_APP_KEY, THEME_KEY};
pub use json::{JsonPreferenceStore, PREFERENCES_FILE};
pub use memory::MemoryPreferenceStore;

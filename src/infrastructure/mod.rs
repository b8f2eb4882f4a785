//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the dashboard keeps its preferences and logs, using the
//! platform conventions exposed by the `directories` crate.

pub mod paths;

pub use paths::{data_dir, expand_tilde};

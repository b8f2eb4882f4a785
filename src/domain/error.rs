//! Error types for the OCULUS dashboard core.
//!
//! The filtering, theming and badge lookups are total and never fail. This
//! module covers the ambient surfaces around them: loading configuration,
//! loading custom badge tables and flushing persisted preferences.

use thiserror::Error;

/// The main error type for OCULUS operations.
///
/// Most variants carry a description of what went wrong. I/O failures convert
/// automatically through `#[from]`.
///
/// # Examples
///
/// ```
/// use oculus::OculusError;
///
/// fn validate() -> Result<(), OculusError> {
///     Err(OculusError::Config("trace_level must not be empty".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum OculusError {
    /// Reading or writing persisted preferences failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A badge table could not be parsed.
    #[error("Badge table error: {0}")]
    Badge(String),
}

/// A specialized `Result` type for OCULUS operations.
pub type Result<T> = std::result::Result<T, OculusError>;

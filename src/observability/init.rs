//! Tracing subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "oculus.log";

/// Installs the global subscriber writing to `<data_dir>/oculus.log`.
///
/// # Level Resolution
///
/// 1. `RUST_LOG`, if set and valid
/// 2. `config.trace_level`
/// 3. `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if the directory cannot be created (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use oculus::observability::init_tracing;
/// use oculus::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     data_dir: Some(dir.path().join("logs")),
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = config.resolved_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or("info");
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    let writer = Mutex::new(RotatingFile::new(data_dir.join(LOG_FILE)));
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_configured_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().join("nested").join("logs")),
            ..Config::default()
        };

        init_tracing(&config);
        init_tracing(&config);

        assert!(dir.path().join("nested").join("logs").is_dir());
    }
}

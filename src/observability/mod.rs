//! Structured logging to a rotating file in the data directory.
//!
//! Every layer logs through `tracing` macros and spans. This module installs
//! the subscriber that turns them into plain-text lines:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFile → oculus.log
//! ```
//!
//! # Features
//!
//! - **File Output**: Lines written to `<data_dir>/oculus.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` configuration option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use oculus::observability::init_tracing;
//! use oculus::Config;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = Config {
//!     data_dir: Some(dir.path().to_path_buf()),
//!     ..Config::default()
//! };
//! init_tracing(&config);
//!
//! tracing::debug!("dashboard initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::RotatingFile;
pub use init::init_tracing;

//! OCULUS: presentation core for a family of operational dashboards.
//!
//! OCULUS and its sibling apps (Hyperion, Mimir, Flow, Helius) share one
//! presentation model:
//! - Client-side filtering of typed record tables with facets, ranges, dates,
//!   flags and free-text search
//! - A session-wide light/dark theme that follows the stored choice, then the
//!   OS, then a default
//! - Application identity derived from the route, with an app switcher
//! - Status, priority and service-level badges with a fallback for unmapped
//!   values
//! - Per-table detail levels that progressively reveal columns

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Session (lib.rs)                                   │  ← Entry point
//! │  - Config, initialize()                             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Context Layer (context/)                           │  ← Theme + app
//! │  - Preference resolution                            │
//! │  - Event handling → Actions                         │
//! │  - Subscriptions                                    │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Filter Layer  │   │ Storage Layer │   │ View Layer    │
//! │ (filter/)     │   │ (storage/)    │   │ (view/, badge)│
//! │ - Criteria    │   │ - JSON I/O    │   │ - Columns     │
//! │ - Predicates  │   │ - In-memory   │   │ - Badges      │
//! │ - Facets      │   │ - Backend API │   │ - Empty state │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Records, app and theme identity (domain/)        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Core types (records, app and theme identity, errors)
//! - [`filter`]: Filter criteria, predicates and facet helpers
//! - [`context`]: Session theme and app context
//! - [`storage`]: Preference persistence
//! - [`badge`]: Badge tables
//! - [`view`]: Table view models
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! From a TOML file:
//!
//! ```toml
//! # ~/.config/oculus/config.toml
//! theme = "dark"
//! detect_os_theme = false
//! trace_level = "debug"
//! badge_file = "~/.config/oculus/status-badges.toml"
//! ```
//!
//! or from a string map supplied by the embedding host
//! ([`Config::from_map`]).
//!
//! # Examples
//!
//! ```rust
//! use oculus::context::ContextEvent;
//! use oculus::filter::{FilterSchema, FilterStore, FilterUpdate};
//! use oculus::view::TableView;
//! use oculus::{initialize, AppId, Config};
//!
//! let dir = tempfile::tempdir()?;
//! let config = Config {
//!     data_dir: Some(dir.path().to_path_buf()),
//!     detect_os_theme: false,
//!     ..Default::default()
//! };
//!
//! let mut session = initialize(&config, "/mimir/racks");
//! assert_eq!(session.context.app(), AppId::Mimir);
//!
//! let actions = session.context.handle_event(&ContextEvent::ToggleTheme);
//! assert_eq!(actions.len(), 1);
//!
//! let mut filters = FilterStore::new(FilterSchema::inventory());
//! filters.update(FilterUpdate::Search("dell".into()));
//! let records: Vec<oculus::domain::InventoryItem> = Vec::new();
//! let vm = TableView::inventory().compute(&records, &filters, &session.badges);
//! assert_eq!(vm.visible_count, 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod badge;
pub mod context;
pub mod domain;
pub mod filter;
pub mod infrastructure;
pub mod storage;
pub mod view;

pub mod observability;

pub use context::{Action, AppContext, ContextEvent, DetailLevel};
pub use domain::{AppId, OculusError, Result, ThemeMode};

use badge::{BadgeRegistry, BadgeTable};
use context::{NoOsSignal, OsThemeSignal, TerminalBackground};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storage::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore, PREFERENCES_FILE};

/// Dashboard configuration.
///
/// Every field is optional in both the TOML file and the string map; missing
/// or unparsable values keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for `preferences.json` and `oculus.log`. A leading `~` is
    /// expanded when resolved.
    ///
    /// Default: the platform data directory (see
    /// [`infrastructure::data_dir`]).
    pub data_dir: Option<PathBuf>,

    /// Tracing level for log output.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Theme used when neither a stored choice nor an OS signal exists.
    /// Default: light.
    #[serde(rename = "theme")]
    pub fallback_theme: ThemeMode,

    /// Whether to consult the terminal background for a theme signal.
    /// Default: `true`
    pub detect_os_theme: bool,

    /// Path to a custom badge table replacing the built-in table of its kind.
    pub badge_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            trace_level: None,
            fallback_theme: ThemeMode::default(),
            detect_os_theme: true,
            badge_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-supplied string map.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`: String → `PathBuf` (`~` expanded by [`Config::resolved_data_dir`])
    /// - `trace_level`: String → `Option<String>`
    /// - `theme`: `light` | `dark` (falls back to light on parse error)
    /// - `detect_os_theme`: `true` | `false` (falls back to `true`)
    /// - `badge_file`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use oculus::{Config, ThemeMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "Dark".to_string());
    /// map.insert("detect_os_theme".to_string(), "no".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.fallback_theme, ThemeMode::Dark);
    /// assert!(config.detect_os_theme);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let fallback_theme = config
            .get("theme")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.fallback_theme);

        let detect_os_theme = config
            .get("detect_os_theme")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(defaults.detect_os_theme);

        Self {
            data_dir: config
                .get("data_dir")
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            trace_level: config.get("trace_level").cloned(),
            fallback_theme,
            detect_os_theme,
            badge_file: config.get("badge_file").cloned(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`OculusError::Io`] if the file cannot be read and
    /// [`OculusError::Config`] if it is not valid configuration TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| OculusError::Config(format!("failed to parse config TOML: {e}")))
    }

    /// The configured data directory with a leading `~` expanded, or the
    /// platform default.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir
                .to_str()
                .map_or_else(|| dir.clone(), infrastructure::expand_tilde),
            None => infrastructure::data_dir(),
        }
    }
}

/// Everything a dashboard shell needs after startup.
pub struct Session {
    /// Session-wide theme and app context.
    pub context: AppContext<'static, Box<dyn PreferenceStore>>,

    /// Badge tables, with any custom table from the configuration applied.
    pub badges: BadgeRegistry,

    /// Actions to run once at mount (applying the initial theme).
    pub startup_actions: Vec<Action>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("snapshot", &self.context.snapshot())
            .field("badges", &self.badges)
            .field("startup_actions", &self.startup_actions)
            .finish_non_exhaustive()
    }
}

/// Initializes a dashboard session for the page at `route`.
///
/// Creates a [`Session`] with:
/// - Preferences from `<data_dir>/preferences.json` (in-memory if the file
///   store cannot be opened)
/// - The resolved theme: stored choice, then terminal background (if
///   `detect_os_theme`), then `config.fallback_theme`
/// - The app derived from `route`
/// - Built-in badge tables, with `badge_file` applied if it loads
///
/// Never fails: each missing or broken source is logged and skipped.
///
/// # Example
///
/// ```rust
/// use oculus::{initialize, Config, ThemeMode};
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     data_dir: Some(dir.path().to_path_buf()),
///     detect_os_theme: false,
///     fallback_theme: ThemeMode::Dark,
///     ..Default::default()
/// };
///
/// let session = initialize(&config, "/");
/// assert_eq!(session.context.theme(), ThemeMode::Dark);
/// ```
pub fn initialize(config: &Config, route: &str) -> Session {
    tracing::debug!(route = %route, "initializing oculus session");

    let store: Box<dyn PreferenceStore> =
        match JsonPreferenceStore::open(config.resolved_data_dir().join(PREFERENCES_FILE)) {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::warn!(error = %e, "preference file unavailable, preferences will not persist");
                Box::new(MemoryPreferenceStore::new())
            }
        };

    let os: &dyn OsThemeSignal = if config.detect_os_theme {
        &TerminalBackground
    } else {
        &NoOsSignal
    };

    let (context, startup_actions) = AppContext::mount(store, route, os, config.fallback_theme);

    let mut badges = BadgeRegistry::builtin();
    if let Some(badge_file) = &config.badge_file {
        match BadgeTable::from_file(infrastructure::expand_tilde(badge_file)) {
            Ok(table) => badges.insert(table),
            Err(e) => {
                tracing::warn!(badge_file = %badge_file, error = %e, "failed to load badge table, using built-in");
            }
        }
    }

    Session {
        context,
        badges,
        startup_actions,
    }
}

//! Ordered resolution of initial preferences.
//!
//! Initial values come from a chain of sources, each of which may have
//! nothing to say: the persisted user choice, then an OS-level signal, then a
//! hardcoded default. [`Resolver`] makes that chain explicit: stages run in
//! order and the first one returning `Some` wins.

use crate::domain::ThemeMode;
use crate::storage::PreferenceStore;
use std::str::FromStr;

/// Ordered list of optional value sources.
///
/// # Example
///
/// ```
/// use oculus::context::Resolver;
/// use oculus::ThemeMode;
///
/// let theme = Resolver::new()
///     .stage("stored", || None)
///     .stage("os", || Some(ThemeMode::Dark))
///     .resolve(ThemeMode::Light);
/// assert_eq!(theme, ThemeMode::Dark);
/// ```
pub struct Resolver<'a, T> {
    stages: Vec<(&'static str, Box<dyn Fn() -> Option<T> + 'a>)>,
}

impl<'a, T: std::fmt::Debug> Resolver<'a, T> {
    /// Creates an empty pipeline; resolving it yields the fallback.
    #[must_use]
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage; stages run in insertion order.
    #[must_use]
    pub fn stage(mut self, name: &'static str, source: impl Fn() -> Option<T> + 'a) -> Self {
        self.stages.push((name, Box::new(source)));
        self
    }

    /// Returns the first present value, or `fallback`.
    pub fn resolve(&self, fallback: T) -> T {
        for (name, source) in &self.stages {
            if let Some(value) = source() {
                tracing::debug!(stage = *name, value = ?value, "preference resolved");
                return value;
            }
            tracing::trace!(stage = *name, "stage had no value");
        }
        tracing::debug!(value = ?fallback, "preference resolved from fallback");
        fallback
    }
}

impl<T: std::fmt::Debug> Default for Resolver<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads and parses a persisted preference.
///
/// Unreadable storage and unparsable values both yield `None` so resolution
/// moves on to the next stage.
pub fn stored_preference<T, S>(store: &S, key: &str) -> Option<T>
where
    T: FromStr,
    S: PreferenceStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "could not read stored preference");
            return None;
        }
    };

    raw.parse().ok().or_else(|| {
        tracing::warn!(key = %key, value = %raw, "ignoring unrecognized stored preference");
        None
    })
}

/// An operating-system level light/dark preference.
pub trait OsThemeSignal {
    fn preferred_theme(&self) -> Option<ThemeMode>;
}

/// Reads the preference from the terminal's background luminance.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBackground;

impl OsThemeSignal for TerminalBackground {
    fn preferred_theme(&self) -> Option<ThemeMode> {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Some(ThemeMode::Light),
            Ok(_) => Some(ThemeMode::Dark),
            Err(e) => {
                tracing::debug!(error = %e, "terminal background not detectable");
                None
            }
        }
    }
}

/// No OS signal available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOsSignal;

impl OsThemeSignal for NoOsSignal {
    fn preferred_theme(&self) -> Option<ThemeMode> {
        None
    }
}

/// A fixed signal, e.g. a preference reported by the embedding host.
impl OsThemeSignal for ThemeMode {
    fn preferred_theme(&self) -> Option<ThemeMode> {
        Some(*self)
    }
}

impl OsThemeSignal for Option<ThemeMode> {
    fn preferred_theme(&self) -> Option<ThemeMode> {
        *self
    }
}

/// Resolves the initial theme: stored choice, then OS signal, then `fallback`.
pub fn resolve_theme<S>(store: &S, os: &dyn OsThemeSignal, fallback: ThemeMode) -> ThemeMode
where
    S: PreferenceStore + ?Sized,
{
    Resolver::new()
        .stage("stored", || stored_preference(store, crate::storage::THEME_KEY))
        .stage("os", || os.preferred_theme())
        .resolve(fallback)
}

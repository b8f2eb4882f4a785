//! Application identity and theme enums shared across the dashboards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Light or dark presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The value written to persisted storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Whether the document-level dark style flag should be set.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// The dashboard applications sharing this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    #[default]
    Oculus,
    Hyperion,
    Mimir,
    Flow,
    Helius,
}

impl AppId {
    /// Every app, in app-switcher order.
    pub const ALL: [Self; 5] = [
        Self::Oculus,
        Self::Hyperion,
        Self::Mimir,
        Self::Flow,
        Self::Helius,
    ];

    /// Identifier written to persisted storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oculus => "oculus",
            Self::Hyperion => "hyperion",
            Self::Mimir => "mimir",
            Self::Flow => "flow",
            Self::Helius => "helius",
        }
    }

    /// Display name for app switchers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Oculus => "OCULUS",
            Self::Hyperion => "Hyperion",
            Self::Mimir => "Mimir",
            Self::Flow => "Flow",
            Self::Helius => "Helius",
        }
    }

    /// Canonical root path the router navigates to when the app is selected.
    #[must_use]
    pub const fn root_path(self) -> &'static str {
        match self {
            Self::Oculus => "/",
            Self::Hyperion => "/hyperion",
            Self::Mimir => "/mimir",
            Self::Flow => "/flow",
            Self::Helius => "/helius",
        }
    }

    /// Derives the app from the first segment of a route path.
    ///
    /// Unknown or empty prefixes belong to OCULUS.
    ///
    /// ```
    /// use oculus::AppId;
    ///
    /// assert_eq!(AppId::from_path("/mimir/racks/12"), AppId::Mimir);
    /// assert_eq!(AppId::from_path("/flowchart"), AppId::Oculus);
    /// assert_eq!(AppId::from_path("/inventory"), AppId::Oculus);
    /// ```
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let segment = path
            .trim_start_matches('/')
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();

        match segment {
            "hyperion" => Self::Hyperion,
            "mimir" => Self::Mimir,
            "flow" => Self::Flow,
            "helius" => Self::Helius,
            _ => Self::Oculus,
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|app| app.as_str() == wanted)
            .ok_or_else(|| format!("unknown app: {wanted}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_prefixes_map_to_apps() {
        assert_eq!(AppId::from_path("/hyperion"), AppId::Hyperion);
        assert_eq!(AppId::from_path("/helius/capacity?rack=4"), AppId::Helius);
        assert_eq!(AppId::from_path("/flow#top"), AppId::Flow);
        assert_eq!(AppId::from_path("/"), AppId::Oculus);
        assert_eq!(AppId::from_path(""), AppId::Oculus);
    }

    #[test]
    fn root_paths_route_back_to_their_app() {
        for app in AppId::ALL {
            assert_eq!(AppId::from_path(app.root_path()), app);
        }
    }

    #[test]
    fn parses_persisted_values() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" Light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("purple".parse::<ThemeMode>().is_err());
        assert_eq!("mimir".parse::<AppId>(), Ok(AppId::Mimir));
        assert!("zeus".parse::<AppId>().is_err());
    }
}

//! Status, priority and service-level badges.
//!
//! Domain status strings map to a presentational [`BadgeVariant`] and a
//! human-readable label. The set of domain values is open: feeds add new
//! statuses without notice, so every table carries a fallback badge and
//! [`BadgeTable::lookup`] never fails.
//!
//! # Built-in Tables
//!
//! - `status`: inventory and shipment lifecycle states
//! - `priority`: shipment and ticket priorities
//! - `serviceLevel`: support contract tiers
//!
//! # TOML Format
//!
//! ```toml
//! kind = "status"
//!
//! [fallback]
//! variant = "unknown"
//! label = "Unknown"
//!
//! [entries]
//! active = { variant = "success", label = "Active" }
//! "in-transit" = { variant = "info", label = "In Transit" }
//! ```
//!
//! Keys match case-insensitively.

use crate::domain::error::{OculusError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Which domain enum a table translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BadgeKind {
    Status,
    Priority,
    ServiceLevel,
}

/// Presentational variant understood by the design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Success,
    Info,
    Warning,
    Error,
    Neutral,
    /// Designated variant for values without a mapping.
    Unknown,
}

impl BadgeVariant {
    /// Variant name as used in TOML and by the design system.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Neutral => "neutral",
            Self::Unknown => "unknown",
        }
    }
}

/// A rendered badge: visual variant plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Visual treatment.
    pub variant: BadgeVariant,
    /// Human-readable text shown inside the badge.
    pub label: String,
}

impl Badge {
    /// Creates a badge.
    pub fn new(variant: BadgeVariant, label: impl Into<String>) -> Self {
        Self {
            variant,
            label: label.into(),
        }
    }
}

/// Lookup table from domain values to badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeTable {
    kind: BadgeKind,
    fallback: Badge,
    #[serde(default)]
    entries: BTreeMap<String, Badge>,
}

impl BadgeTable {
    /// A table with no entries; every lookup yields the fallback.
    #[must_use]
    pub fn empty(kind: BadgeKind) -> Self {
        Self {
            kind,
            fallback: Badge::new(BadgeVariant::Unknown, "Unknown"),
            entries: BTreeMap::new(),
        }
    }

    /// Returns the built-in table for `kind`.
    ///
    /// Built-in tables are embedded at compile time; a parse failure is
    /// logged and degrades to an empty table rather than aborting.
    #[must_use]
    pub fn builtin(kind: BadgeKind) -> Self {
        let toml_str = match kind {
            BadgeKind::Status => include_str!("../../badges/status.toml"),
            BadgeKind::Priority => include_str!("../../badges/priority.toml"),
            BadgeKind::ServiceLevel => include_str!("../../badges/service_level.toml"),
        };

        Self::from_toml_str(toml_str).unwrap_or_else(|e| {
            tracing::error!(kind = ?kind, error = %e, "built-in badge table failed to parse");
            Self::empty(kind)
        })
    }

    /// Parses a table from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`OculusError::Badge`] if the TOML is malformed or has unknown
    /// variants.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let mut table: Self = toml::from_str(toml_str)
            .map_err(|e| OculusError::Badge(format!("failed to parse badge TOML: {e}")))?;
        table.entries = std::mem::take(&mut table.entries)
            .into_iter()
            .map(|(key, badge)| (normalize(&key), badge))
            .collect();
        Ok(table)
    }

    /// Loads a table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Which domain enum this table translates.
    #[must_use]
    pub const fn kind(&self) -> BadgeKind {
        self.kind
    }

    /// Badge returned for unmapped keys.
    #[must_use]
    pub const fn fallback(&self) -> &Badge {
        &self.fallback
    }

    /// Adds or replaces a mapping.
    #[must_use]
    pub fn with_entry(mut self, key: &str, badge: Badge) -> Self {
        self.entries.insert(normalize(key), badge);
        self
    }

    /// Translates a domain value. Unmapped values get the fallback badge.
    ///
    /// ```
    /// use oculus::badge::{BadgeKind, BadgeTable, BadgeVariant};
    ///
    /// let statuses = BadgeTable::builtin(BadgeKind::Status);
    /// assert_eq!(statuses.lookup("Active").variant, BadgeVariant::Success);
    /// assert_eq!(statuses.lookup("quarantined").variant, BadgeVariant::Unknown);
    /// ```
    #[must_use]
    pub fn lookup(&self, key: &str) -> &Badge {
        self.entries.get(&normalize(key)).unwrap_or(&self.fallback)
    }

    /// Whether `key` has an explicit mapping.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize(key))
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

/// One table per [`BadgeKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeRegistry {
    status: BadgeTable,
    priority: BadgeTable,
    service_level: BadgeTable,
}

impl BadgeRegistry {
    /// Registry holding the three embedded tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            status: BadgeTable::builtin(BadgeKind::Status),
            priority: BadgeTable::builtin(BadgeKind::Priority),
            service_level: BadgeTable::builtin(BadgeKind::ServiceLevel),
        }
    }

    /// Replaces the table of the same kind.
    pub fn insert(&mut self, table: BadgeTable) {
        tracing::debug!(kind = ?table.kind(), "badge table replaced");
        match table.kind() {
            BadgeKind::Status => self.status = table,
            BadgeKind::Priority => self.priority = table,
            BadgeKind::ServiceLevel => self.service_level = table,
        }
    }

    /// Returns the table for `kind`.
    #[must_use]
    pub const fn table(&self, kind: BadgeKind) -> &BadgeTable {
        match kind {
            BadgeKind::Status => &self.status,
            BadgeKind::Priority => &self.priority,
            BadgeKind::ServiceLevel => &self.service_level,
        }
    }

    /// Translates `key` using the table for `kind`; never fails.
    #[must_use]
    pub fn lookup(&self, kind: BadgeKind, key: &str) -> &Badge {
        self.table(kind).lookup(key)
    }
}

impl Default for BadgeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_parse() {
        for kind in [BadgeKind::Status, BadgeKind::Priority, BadgeKind::ServiceLevel] {
            let table = BadgeTable::from_toml_str(match kind {
                BadgeKind::Status => include_str!("../../badges/status.toml"),
                BadgeKind::Priority => include_str!("../../badges/priority.toml"),
                BadgeKind::ServiceLevel => include_str!("../../badges/service_level.toml"),
            })
            .unwrap();
            assert_eq!(table.kind(), kind);
            assert_eq!(table.fallback().variant, BadgeVariant::Unknown);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = BadgeTable::builtin(BadgeKind::Status);
        assert_eq!(table.lookup(" IN-TRANSIT ").label, "In Transit");
        assert!(table.contains("Delayed"));
    }

    #[test]
    fn unknown_keys_fall_back() {
        let registry = BadgeRegistry::builtin();

        assert_eq!(
            registry.lookup(BadgeKind::Priority, "p0-urgent"),
            &Badge::new(BadgeVariant::Unknown, "Unassigned")
        );
        assert_eq!(
            registry.lookup(BadgeKind::Status, "").variant,
            BadgeVariant::Unknown
        );
    }

    #[test]
    fn custom_table_replaces_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.toml");
        fs::write(
            &path,
            r#"
kind = "status"
fallback = { variant = "neutral", label = "Other" }

[entries]
Racked = { variant = "success", label = "Racked" }
"#,
        )
        .unwrap();

        let mut registry = BadgeRegistry::builtin();
        registry.insert(BadgeTable::from_file(&path).unwrap());

        assert_eq!(registry.lookup(BadgeKind::Status, "racked").label, "Racked");
        assert_eq!(registry.lookup(BadgeKind::Status, "active").label, "Other");
        assert_eq!(
            registry.lookup(BadgeKind::Priority, "high").variant,
            BadgeVariant::Warning
        );
    }

    #[test]
    fn malformed_tables_are_rejected() {
        let err = BadgeTable::from_toml_str("kind = \"status\"\n[fallback]\nvariant = \"sparkly\"\nlabel = \"?\"")
            .unwrap_err();
        assert!(matches!(err, OculusError::Badge(_)));
    }
}

//! Per-page filter schema.
//!
//! A [`FilterSchema`] declares which record fields a page filters on and how:
//! the searchable fields, the facets behind multi- and single-select
//! controls, numeric range sliders with their default domain bounds, the date
//! field behind the date picker, and the boolean toggles with the condition
//! each one enforces. Default range bounds live here and nowhere else, so
//! "clear all" and "is this slider active" always agree.

use crate::domain::NO_WARRANTY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    /// Creates inclusive bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends. `NaN` is never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Condition a record must satisfy while a boolean toggle is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlagCondition {
    /// Field equals the given value, e.g. "active only".
    FieldEquals { field: String, value: String },
    /// Field is present, non-empty and not the sentinel, e.g. "has warranty".
    PresentExcept { field: String, sentinel: String },
}

impl FlagCondition {
    /// Flag requiring `field` to equal `value`.
    pub fn field_equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FieldEquals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Flag requiring `field` to be present, non-empty and not `sentinel`.
    pub fn present_except(field: impl Into<String>, sentinel: impl Into<String>) -> Self {
        Self::PresentExcept {
            field: field.into(),
            sentinel: sentinel.into(),
        }
    }
}

/// A numeric range control bound to a record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    /// Record field the range filters on.
    pub field: String,
    /// Default bounds; a range equal to these is inactive.
    pub domain: NumericRange,
}

/// Declares how a page's filter controls map onto record fields.
///
/// Names that are not declared still work: a facet, select or range named
/// after a record field filters on that field directly, and an undeclared
/// toggle requires its like-named field to be present and non-empty.
///
/// # Example
///
/// ```
/// use oculus::filter::{FilterSchema, FlagCondition};
///
/// let schema = FilterSchema::new()
///     .with_search_fields(["hostname", "supplier"])
///     .with_facet("status", "status")
///     .with_range("cost", "cost", 0.0, 500_000.0)
///     .with_date_field("purchaseDate")
///     .with_flag("activeOnly", FlagCondition::field_equals("status", "active"));
///
/// assert_eq!(schema.facet_field("status"), "status");
/// assert_eq!(schema.range_domain("cost").map(|d| d.max), Some(500_000.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSchema {
    /// Fields the search box matches against.
    #[serde(default)]
    pub search_fields: Vec<String>,
    /// Multi- and single-select facet name → record field.
    #[serde(default)]
    pub facets: BTreeMap<String, String>,
    /// Range name → field and default bounds.
    #[serde(default)]
    pub ranges: BTreeMap<String, RangeSpec>,
    /// Field the date window applies to; `None` disables it.
    #[serde(default)]
    pub date_field: Option<String>,
    /// Toggle name → condition enforced while on.
    #[serde(default)]
    pub flags: BTreeMap<String, FlagCondition>,
}

impl FilterSchema {
    /// Empty schema: no search fields, facets, ranges or flags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the searchable fields.
    #[must_use]
    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Declares facet `name` filtering on record field `field`.
    #[must_use]
    pub fn with_facet(mut self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.facets.insert(name.into(), field.into());
        self
    }

    /// Declares range `name` on `field` with default bounds `min..=max`.
    ///
    /// A range equal to these bounds does not restrict anything.
    #[must_use]
    pub fn with_range(
        mut self,
        name: impl Into<String>,
        field: impl Into<String>,
        min: f64,
        max: f64,
    ) -> Self {
        self.ranges.insert(
            name.into(),
            RangeSpec {
                field: field.into(),
                domain: NumericRange::new(min, max),
            },
        );
        self
    }

    /// Sets the field the date window applies to.
    #[must_use]
    pub fn with_date_field(mut self, field: impl Into<String>) -> Self {
        self.date_field = Some(field.into());
        self
    }

    /// Declares toggle `name`.
    #[must_use]
    pub fn with_flag(mut self, name: impl Into<String>, condition: FlagCondition) -> Self {
        self.flags.insert(name.into(), condition);
        self
    }

    /// Record field behind a facet; the facet name itself when undeclared.
    #[must_use]
    pub fn facet_field<'a>(&'a self, facet: &'a str) -> &'a str {
        self.facets.get(facet).map_or(facet, String::as_str)
    }

    /// Record field behind a range control; the name itself when undeclared.
    #[must_use]
    pub fn range_field<'a>(&'a self, name: &'a str) -> &'a str {
        self.ranges.get(name).map_or(name, |spec| spec.field.as_str())
    }

    /// Default bounds of a declared range.
    #[must_use]
    pub fn range_domain(&self, name: &str) -> Option<NumericRange> {
        self.ranges.get(name).map(|spec| spec.domain)
    }

    /// Schema of the data-center inventory pages.
    #[must_use]
    pub fn inventory() -> Self {
        Self::new()
            .with_search_fields(["hostname", "id", "model", "supplier"])
            .with_facet("status", "status")
            .with_facet("location", "location")
            .with_facet("serviceLevel", "serviceLevel")
            .with_facet("supplier", "supplier")
            .with_range("cost", "cost", 0.0, 500_000.0)
            .with_range("cpuCores", "cpuCores", 0.0, 256.0)
            .with_date_field("purchaseDate")
            .with_flag("activeOnly", FlagCondition::field_equals("status", "active"))
            .with_flag(
                "hasWarranty",
                FlagCondition::present_except("warranty", NO_WARRANTY),
            )
    }

    /// Schema of the supply-chain shipment pages.
    #[must_use]
    pub fn shipments() -> Self {
        Self::new()
            .with_search_fields(["orderNumber", "supplier", "destination"])
            .with_facet("status", "status")
            .with_facet("priority", "priority")
            .with_facet("supplier", "supplier")
            .with_facet("destination", "destination")
            .with_range("cost", "cost", 0.0, 500_000.0)
            .with_range("quantity", "quantity", 0.0, 10_000.0)
            .with_date_field("shipDate")
            .with_flag("delayedOnly", FlagCondition::field_equals("status", "delayed"))
            .with_flag("tracked", FlagCondition::present_except("trackingNumber", ""))
    }
}

//! Filter criteria for a single page.

use super::predicate::CompiledFilter;
use super::schema::{FilterSchema, NumericRange};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Inclusive date window; an absent bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a window; `None` leaves that side open.
    #[must_use]
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// True when neither bound is set, i.e. the window is inactive.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Current filter criteria of a page.
///
/// The default value is the identity filter: it matches every record. Empty
/// sets, absent selections, unbounded dates, `false` toggles and ranges equal
/// to their schema domain all mean "do not restrict".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Case-insensitive substring query over the schema's search fields.
    #[serde(default)]
    pub search: String,
    /// Facet name → selected values.
    #[serde(default)]
    pub multi_select: BTreeMap<String, BTreeSet<String>>,
    /// Facet name → selected value; an absent key is "no selection".
    #[serde(default)]
    pub single_select: BTreeMap<String, String>,
    /// Range name → inclusive bounds.
    #[serde(default)]
    pub ranges: BTreeMap<String, NumericRange>,
    /// Inclusive window over the schema's date field.
    #[serde(default)]
    pub date_range: DateRange,
    /// Toggle name → enabled.
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
}

impl FilterState {
    /// Identity state for a schema, with every declared range at its domain.
    #[must_use]
    pub fn for_schema(schema: &FilterSchema) -> Self {
        Self {
            ranges: schema
                .ranges
                .iter()
                .map(|(name, spec)| (name.clone(), spec.domain))
                .collect(),
            ..Self::default()
        }
    }

    /// Single-select value of `facet`, if any.
    #[must_use]
    pub fn selected(&self, facet: &str) -> Option<&str> {
        self.single_select.get(facet).map(String::as_str)
    }

    /// Whether toggle `name` is on.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Whether a stored range restricts anything under `schema`.
    #[must_use]
    pub fn range_is_active(&self, name: &str, schema: &FilterSchema) -> bool {
        match (self.ranges.get(name), schema.range_domain(name)) {
            (Some(range), Some(domain)) => *range != domain,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Number of controls that restrict the result under `schema`.
    ///
    /// Each control compiles to at most one predicate, so this is the size of
    /// the compiled conjunction. A date window without a schema date field, or
    /// a query without search fields, does not count.
    #[must_use]
    pub fn active_filter_count(&self, schema: &FilterSchema) -> usize {
        CompiledFilter::new(self, schema).predicates().len()
    }

    /// Whether any control restricts the result.
    #[must_use]
    pub fn has_active_filters(&self, schema: &FilterSchema) -> bool {
        self.active_filter_count(schema) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn schema_defaults_are_inactive() {
        let schema = FilterSchema::inventory();
        let state = FilterState::for_schema(&schema);

        assert_eq!(state.ranges.len(), schema.ranges.len());
        assert!(!state.has_active_filters(&schema));
        assert!(!FilterState::default().has_active_filters(&schema));
    }

    #[test]
    fn each_deviation_counts() {
        let schema = FilterSchema::inventory();
        let mut state = FilterState::for_schema(&schema);

        state.search = "dell".to_string();
        state
            .multi_select
            .insert("status".to_string(), BTreeSet::from(["active".to_string()]));
        state.multi_select.insert("location".to_string(), BTreeSet::new());
        state.ranges.insert("cost".to_string(), NumericRange::new(0.0, 500.0));
        state.flags.insert("hasWarranty".to_string(), false);
        assert_eq!(state.active_filter_count(&schema), 3);

        state.date_range.end = Some(date(2024, 12, 31));
        state.flags.insert("activeOnly".to_string(), true);
        assert_eq!(state.active_filter_count(&schema), 5);
    }

    #[test]
    fn undeclared_range_is_always_active() {
        let schema = FilterSchema::new();
        let mut state = FilterState::default();
        state.ranges.insert("power".to_string(), NumericRange::new(0.0, 1.0));

        assert!(state.range_is_active("power", &schema));
        assert!(state.has_active_filters(&schema));
    }

    #[test]
    fn controls_the_schema_cannot_apply_do_not_count() {
        use crate::domain::{DynamicRecord, Value};
        use crate::filter::filter_records;

        let schema = FilterSchema::new().with_facet("status", "status");
        let records = vec![DynamicRecord::from([(
            "status".to_string(),
            Value::from("active"),
        )])];

        let mut state = FilterState::for_schema(&schema);
        state.date_range.start = Some(date(2030, 1, 1));
        state.search = "dell".to_string();

        assert_eq!(state.active_filter_count(&schema), 0);
        assert!(!state.has_active_filters(&schema));
        assert_eq!(filter_records(&records, &state, &schema).len(), 1);

        state
            .multi_select
            .insert("status".to_string(), BTreeSet::from(["active".to_string()]));
        assert_eq!(state.active_filter_count(&schema), 1);
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));

        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 31)));
        assert!(!range.contains(date(2023, 12, 31)));
        assert!(!range.contains(date(2024, 2, 1)));
        assert!(DateRange::default().contains(date(1999, 6, 1)));
    }
}

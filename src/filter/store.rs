//! Filter state store for a page instance.
//!
//! The store owns a page's [`FilterSchema`] and current [`FilterState`]. Filter
//! controls report edits as [`FilterUpdate`]s; every accepted edit bumps the
//! store revision so views know to re-run the evaluator. Nothing is validated
//! beyond the types: a value that no record carries simply matches nothing.

use super::predicate::filter_records;
use super::schema::{FilterSchema, NumericRange};
use super::state::{DateRange, FilterState};
use crate::domain::Record;
use std::collections::BTreeSet;

/// A single edit coming from a filter control.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    /// Replaces the search query.
    Search(String),
    /// Replaces the selected values of a multi-select facet.
    MultiSelect {
        facet: String,
        values: BTreeSet<String>,
    },
    /// Sets or clears a single-select facet.
    SingleSelect {
        facet: String,
        value: Option<String>,
    },
    /// Replaces the bounds of a range control.
    Range { name: String, range: NumericRange },
    /// Replaces the date window.
    DateRange(DateRange),
    /// Turns a boolean toggle on or off.
    Flag { name: String, enabled: bool },
}

/// Filter criteria of one page, plus its schema.
///
/// # Example
///
/// ```
/// use oculus::filter::{FilterSchema, FilterStore, FilterUpdate};
///
/// let mut store = FilterStore::new(FilterSchema::inventory());
/// store.update(FilterUpdate::Search("dell".into()));
/// assert!(store.has_active_filters());
///
/// store.clear();
/// assert!(!store.has_active_filters());
/// ```
#[derive(Debug, Clone)]
pub struct FilterStore {
    schema: FilterSchema,
    state: FilterState,
    revision: u64,
}

impl FilterStore {
    /// Creates a store in the schema's default (identity) state.
    #[must_use]
    pub fn new(schema: FilterSchema) -> Self {
        let state = FilterState::for_schema(&schema);
        Self {
            schema,
            state,
            revision: 0,
        }
    }

    /// The page schema.
    #[must_use]
    pub const fn schema(&self) -> &FilterSchema {
        &self.schema
    }

    /// Current criteria.
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Incremented on every change; views compare it to skip re-filtering.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies one edit. Returns whether the state changed.
    pub fn update(&mut self, update: FilterUpdate) -> bool {
        let _span = tracing::debug_span!("filter_update", update = ?update).entered();

        let before = self.state.clone();
        match update {
            FilterUpdate::Search(query) => self.state.search = query,
            FilterUpdate::MultiSelect { facet, values } => {
                if values.is_empty() {
                    self.state.multi_select.remove(&facet);
                } else {
                    self.state.multi_select.insert(facet, values);
                }
            }
            FilterUpdate::SingleSelect { facet, value } => match value {
                Some(value) => {
                    self.state.single_select.insert(facet, value);
                }
                None => {
                    self.state.single_select.remove(&facet);
                }
            },
            FilterUpdate::Range { name, range } => {
                self.state.ranges.insert(name, range);
            }
            FilterUpdate::DateRange(range) => self.state.date_range = range,
            FilterUpdate::Flag { name, enabled } => {
                if enabled {
                    self.state.flags.insert(name, true);
                } else {
                    self.state.flags.remove(&name);
                }
            }
        }

        self.commit(before)
    }

    /// Adds `value` to a multi-select facet, or removes it if already selected.
    pub fn toggle_facet_value(&mut self, facet: &str, value: &str) -> bool {
        let mut values = self
            .state
            .multi_select
            .get(facet)
            .cloned()
            .unwrap_or_default();

        if !values.remove(value) {
            values.insert(value.to_string());
        }

        self.update(FilterUpdate::MultiSelect {
            facet: facet.to_string(),
            values,
        })
    }

    /// Resets every control to its default in a single step.
    pub fn clear(&mut self) -> bool {
        let before = std::mem::replace(&mut self.state, FilterState::for_schema(&self.schema));
        tracing::debug!("filters cleared");
        self.commit(before)
    }

    /// Whether any control restricts the result.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters(&self.schema)
    }

    /// Number of restricting controls, for the "Filters (n)" indicator.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.state.active_filter_count(&self.schema)
    }

    /// Returns the visible records in their original order.
    pub fn apply<'r, R: Record>(&self, records: &'r [R]) -> Vec<&'r R> {
        filter_records(records, &self.state, &self.schema)
    }

    fn commit(&mut self, before: FilterState) -> bool {
        let changed = before != self.state;
        if changed {
            self.revision += 1;
            tracing::debug!(
                revision = self.revision,
                active = self.active_filter_count(),
                "filter state changed"
            );
        }
        changed
    }
}

//! Filter predicate evaluation.
//!
//! A [`FilterState`] compiles against its [`FilterSchema`] into a
//! [`CompiledFilter`]: one [`Predicate`] per active control, drawn from a small
//! closed set of comparison kinds. A record is visible iff it satisfies every
//! predicate. Inactive controls produce no predicate at all, so the default
//! state compiles to an empty conjunction and matches everything.
//!
//! Predicates are pure; their order never changes the result. Compilation
//! sorts cheap equality checks ahead of range checks and the substring search
//! so most rejections exit early.

use super::schema::{FilterSchema, FlagCondition, NumericRange};
use super::state::{DateRange, FilterState};
use crate::domain::Record;
use std::collections::BTreeSet;

/// A single comparison against one or more record fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<'a> {
    /// Field text equals the value exactly.
    Equals { field: &'a str, value: &'a str },
    /// Field text is one of the values.
    OneOf {
        field: &'a str,
        values: &'a BTreeSet<String>,
    },
    /// Field number lies within inclusive bounds.
    Range { field: &'a str, range: NumericRange },
    /// Field date lies within the inclusive window.
    DateWithin { field: &'a str, range: DateRange },
    /// Any of the fields contains the lowercased needle, ignoring case.
    Contains {
        fields: &'a [String],
        needle: String,
    },
    /// Field is present, non-empty and not the sentinel (ignoring case).
    PresentExcept { field: &'a str, sentinel: &'a str },
}

impl Predicate<'_> {
    /// Relative evaluation cost, used to order checks.
    const fn cost(&self) -> u8 {
        match self {
            Self::Equals { .. } | Self::PresentExcept { .. } => 0,
            Self::OneOf { .. } | Self::Range { .. } => 1,
            Self::DateWithin { .. } => 2,
            Self::Contains { .. } => 3,
        }
    }

    /// Evaluates the predicate. A missing field never matches.
    pub fn test<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Self::Equals { field, value } => record
                .field(field)
                .is_some_and(|v| v.to_text() == *value),
            Self::OneOf { field, values } => record
                .field(field)
                .is_some_and(|v| values.contains(&*v.to_text())),
            Self::Range { field, range } => record
                .field(field)
                .and_then(|v| v.as_number())
                .is_some_and(|n| range.contains(n)),
            Self::DateWithin { field, range } => record
                .field(field)
                .and_then(|v| v.as_date())
                .is_some_and(|d| range.contains(d)),
            Self::Contains { fields, needle } => fields.iter().any(|field| {
                record
                    .field(field)
                    .is_some_and(|v| v.to_text().to_lowercase().contains(needle.as_str()))
            }),
            Self::PresentExcept { field, sentinel } => record.field(field).is_some_and(|v| {
                let text = v.to_text();
                let text = text.trim();
                !text.is_empty() && !text.eq_ignore_ascii_case(sentinel)
            }),
        }
    }
}

/// The conjunction of predicates for one filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFilter<'a> {
    predicates: Vec<Predicate<'a>>,
}

impl<'a> CompiledFilter<'a> {
    /// Compiles the active parts of `state` against `schema`.
    #[must_use]
    pub fn new(state: &'a FilterState, schema: &'a FilterSchema) -> Self {
        let mut predicates = Vec::new();

        for (name, enabled) in &state.flags {
            if !enabled {
                continue;
            }
            let predicate = match schema.flags.get(name) {
                Some(FlagCondition::FieldEquals { field, value }) => Predicate::Equals {
                    field: field.as_str(),
                    value: value.as_str(),
                },
                Some(FlagCondition::PresentExcept { field, sentinel }) => {
                    Predicate::PresentExcept {
                        field: field.as_str(),
                        sentinel: sentinel.as_str(),
                    }
                }
                None => Predicate::PresentExcept {
                    field: name.as_str(),
                    sentinel: "",
                },
            };
            predicates.push(predicate);
        }

        for (facet, value) in &state.single_select {
            predicates.push(Predicate::Equals {
                field: schema.facet_field(facet),
                value: value.as_str(),
            });
        }

        for (facet, values) in &state.multi_select {
            if values.is_empty() {
                continue;
            }
            predicates.push(Predicate::OneOf {
                field: schema.facet_field(facet),
                values,
            });
        }

        for (name, range) in &state.ranges {
            if !state.range_is_active(name, schema) {
                continue;
            }
            predicates.push(Predicate::Range {
                field: schema.range_field(name),
                range: *range,
            });
        }

        if !state.date_range.is_unbounded() {
            if let Some(field) = schema.date_field.as_deref() {
                predicates.push(Predicate::DateWithin {
                    field,
                    range: state.date_range,
                });
            } else {
                tracing::debug!("date range set but schema declares no date field, ignoring");
            }
        }

        if !state.search.is_empty() {
            if schema.search_fields.is_empty() {
                tracing::debug!("search query set but schema declares no search fields, ignoring");
            } else {
                predicates.push(Predicate::Contains {
                    fields: &schema.search_fields,
                    needle: state.search.to_lowercase(),
                });
            }
        }

        predicates.sort_by_key(Predicate::cost);

        Self { predicates }
    }

    /// Compiled predicates, cheapest first.
    #[must_use]
    pub fn predicates(&self) -> &[Predicate<'a>] {
        &self.predicates
    }

    /// True when nothing restricts the result.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Whether `record` satisfies every predicate.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.predicates.iter().all(|p| p.test(record))
    }

    /// Returns the matching records in their original order.
    pub fn apply<'r, R: Record>(&self, records: &'r [R]) -> Vec<&'r R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

/// Tests a single record against a filter state.
///
/// ```
/// use oculus::domain::{DynamicRecord, Value};
/// use oculus::filter::{matches, FilterSchema, FilterState};
///
/// let schema = FilterSchema::new().with_search_fields(["supplier"]);
/// let mut record = DynamicRecord::new();
/// record.insert("supplier".into(), Value::from("Dell Technologies"));
///
/// let mut state = FilterState::default();
/// assert!(matches(&record, &state, &schema));
/// state.search = "DELL".into();
/// assert!(matches(&record, &state, &schema));
/// state.search = "hpe".into();
/// assert!(!matches(&record, &state, &schema));
/// ```
pub fn matches<R: Record + ?Sized>(record: &R, state: &FilterState, schema: &FilterSchema) -> bool {
    CompiledFilter::new(state, schema).matches(record)
}

/// Filters a slice, preserving relative order.
pub fn filter_records<'r, R: Record>(
    records: &'r [R],
    state: &FilterState,
    schema: &FilterSchema,
) -> Vec<&'r R> {
    let _span = tracing::debug_span!("filter_records", total = records.len()).entered();

    let compiled = CompiledFilter::new(state, schema);
    if compiled.is_identity() {
        return records.iter().collect();
    }

    let visible = compiled.apply(records);
    tracing::debug!(
        predicates = compiled.predicates().len(),
        visible = visible.len(),
        "filter applied"
    );
    visible
}

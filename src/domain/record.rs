//! Record abstraction consumed by the filter evaluator.
//!
//! Pages own typed rows (see [`crate::domain::inventory`]) and expose them to
//! the generic filter machinery through the [`Record`] trait, which looks a
//! field up by name. Records are never mutated by filtering; the evaluator
//! only borrows them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Date format used for date-string fields (`2024-03-18`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Borrowed view of a single field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
}

impl<'a> FieldValue<'a> {
    /// Returns the numeric value, parsing text if it holds a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Date(_) => None,
        }
    }

    /// Returns the date value, parsing text in `YYYY-MM-DD` form.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Text(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok(),
            Self::Number(_) => None,
        }
    }

    /// Renders the value as text. Whole numbers print without a fraction.
    #[must_use]
    pub fn to_text(&self) -> Cow<'a, str> {
        match *self {
            Self::Text(s) => Cow::Borrowed(s),
            #[allow(clippy::cast_possible_truncation)]
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Cow::Owned(format!("{}", n as i64))
            }
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Date(d) => Cow::Owned(d.format(DATE_FORMAT).to_string()),
        }
    }
}

/// Owned field value, used by dynamically shaped records.
///
/// Deserializes untagged: numbers become [`Value::Number`], strings shaped
/// like `YYYY-MM-DD` become [`Value::Date`], everything else is text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl Value {
    /// Borrows the value as a [`FieldValue`].
    #[must_use]
    pub fn as_field(&self) -> FieldValue<'_> {
        match self {
            Self::Number(n) => FieldValue::Number(*n),
            Self::Date(d) => FieldValue::Date(*d),
            Self::Text(s) => FieldValue::Text(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

/// A row that can be filtered by field name.
///
/// Returning `None` means the record has no such field; active predicates on
/// a missing field do not match.
pub trait Record {
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

/// Loosely shaped record, e.g. rows decoded from a JSON mock file.
pub type DynamicRecord = BTreeMap<String, Value>;

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(Value::as_field)
    }
}

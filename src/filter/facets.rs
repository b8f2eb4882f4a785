//! Facet derivations over a record set.
//!
//! Filter panels populate their dropdowns, checkbox lists and slider bounds
//! from the loaded records; summary cards show per-status counts. These
//! helpers read the full record set, never the filtered subset.

use super::schema::NumericRange;
use crate::domain::Record;
use std::collections::{BTreeMap, BTreeSet};

/// Sorted distinct values of a field. Records without the field are skipped.
pub fn facet_options<R: Record>(records: &[R], field: &str) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.field(field))
        .map(|v| v.to_text().into_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Number of records per distinct value of a field.
pub fn facet_counts<R: Record>(records: &[R], field: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for value in records.iter().filter_map(|r| r.field(field)) {
        *counts.entry(value.to_text().into_owned()).or_insert(0) += 1;
    }
    counts
}

/// Smallest and largest numeric value of a field, `None` if no record has one.
pub fn numeric_domain<R: Record>(records: &[R], field: &str) -> Option<NumericRange> {
    records
        .iter()
        .filter_map(|r| r.field(field).and_then(|v| v.as_number()))
        .filter(|n| !n.is_nan())
        .fold(None, |acc: Option<NumericRange>, n| {
            Some(acc.map_or(NumericRange::new(n, n), |r| {
                NumericRange::new(r.min.min(n), r.max.max(n))
            }))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DynamicRecord, Value};

    fn rows() -> Vec<DynamicRecord> {
        [("active", 100.0), ("delayed", 600.0), ("active", 40.0)]
            .into_iter()
            .map(|(status, cost)| {
                DynamicRecord::from([
                    ("status".to_string(), Value::from(status)),
                    ("cost".to_string(), Value::Number(cost)),
                ])
            })
            .collect()
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        assert_eq!(facet_options(&rows(), "status"), vec!["active", "delayed"]);
        assert!(facet_options(&rows(), "missing").is_empty());
    }

    #[test]
    fn counts_per_value() {
        let counts = facet_counts(&rows(), "status");
        assert_eq!(counts.get("active"), Some(&2));
        assert_eq!(counts.get("delayed"), Some(&1));
    }

    #[test]
    fn numeric_domain_spans_records() {
        assert_eq!(
            numeric_domain(&rows(), "cost"),
            Some(NumericRange::new(40.0, 600.0))
        );
        assert_eq!(numeric_domain(&rows(), "status"), None);
        assert_eq!(numeric_domain::<DynamicRecord>(&[], "cost"), None);
    }
}

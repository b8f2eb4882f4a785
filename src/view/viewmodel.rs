//! Display-ready table state.
//!
//! View models are computed by [`TableView::compute`](super::TableView::compute)
//! and consumed by whatever renders the page. They carry no logic, only
//! strings and counts.

use crate::badge::Badge;
use crate::context::DetailLevel;
use serde::Serialize;

/// Everything needed to draw one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableViewModel {
    /// Header labels for the columns enabled at `detail`.
    pub columns: Vec<String>,

    /// Visible rows, in source order.
    pub rows: Vec<RowView>,

    /// Detail level the columns were chosen for.
    pub detail: DetailLevel,

    /// Records before filtering.
    pub total_count: usize,

    /// Records after filtering; equals `rows.len()`.
    pub visible_count: usize,

    /// Number of active criteria, for the "Filters (n)" indicator.
    pub active_filters: usize,

    /// Set when there is nothing to show.
    pub empty_state: Option<EmptyState>,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    /// Cell text, aligned with [`TableViewModel::columns`]. Missing fields
    /// render as an empty string.
    pub cells: Vec<String>,

    /// Badge for the table's badge column, if it has one.
    pub badge: Option<Badge>,
}

/// Message shown in place of the table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    /// Primary message (e.g., "No matching records").
    pub message: String,

    /// Secondary hint (e.g., "Clear filters to see all 12 records").
    pub subtitle: String,
}

//! Column layout and view model computation for filtered tables.

use super::viewmodel::{EmptyState, RowView, TableViewModel};
use crate::badge::{BadgeKind, BadgeRegistry};
use crate::context::DetailLevel;
use crate::domain::Record;
use crate::filter::FilterStore;

/// A table column and the lowest detail level that shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Record field rendered in this column.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Lowest detail level that shows the column.
    pub min_detail: DetailLevel,
}

impl ColumnDescriptor {
    /// Creates a column.
    pub fn new(key: impl Into<String>, label: impl Into<String>, min_detail: DetailLevel) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            min_detail,
        }
    }

    /// Whether the column shows at `detail`.
    #[must_use]
    pub fn visible_at(&self, detail: DetailLevel) -> bool {
        detail >= self.min_detail
    }
}

/// Per-table presentation state: columns, badge column and detail level.
///
/// The detail level belongs to one table instance. It starts at
/// [`DetailLevel::Summary`] and is never persisted.
///
/// # Example
///
/// ```
/// use oculus::badge::BadgeRegistry;
/// use oculus::context::DetailLevel;
/// use oculus::filter::{FilterSchema, FilterStore};
/// use oculus::view::TableView;
///
/// let mut view = TableView::shipments();
/// view.set_detail(DetailLevel::DeepDive);
///
/// let store = FilterStore::new(FilterSchema::shipments());
/// let records: Vec<oculus::domain::Shipment> = Vec::new();
/// let vm = view.compute(&records, &store, &BadgeRegistry::builtin());
///
/// assert_eq!(vm.visible_count, 0);
/// assert_eq!(vm.empty_state.unwrap().message, "No records loaded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    detail: DetailLevel,
    columns: Vec<ColumnDescriptor>,
    badge_column: Option<(String, BadgeKind)>,
}

impl TableView {
    /// Creates a view at [`DetailLevel::Summary`] with no badge column.
    #[must_use]
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            detail: DetailLevel::default(),
            columns,
            badge_column: None,
        }
    }

    /// Renders `field` of each row as a badge from the `kind` table.
    #[must_use]
    pub fn with_badge(mut self, field: impl Into<String>, kind: BadgeKind) -> Self {
        self.badge_column = Some((field.into(), kind));
        self
    }

    /// Columns for the hardware inventory page.
    #[must_use]
    pub fn inventory() -> Self {
        use DetailLevel::{DeepDive, Drilldown, Summary};
        Self::new(vec![
            ColumnDescriptor::new("hostname", "Hostname", Summary),
            ColumnDescriptor::new("status", "Status", Summary),
            ColumnDescriptor::new("location", "Location", Summary),
            ColumnDescriptor::new("model", "Model", Drilldown),
            ColumnDescriptor::new("cpuCores", "CPU Cores", Drilldown),
            ColumnDescriptor::new("serviceLevel", "Service Level", Drilldown),
            ColumnDescriptor::new("id", "Asset ID", DeepDive),
            ColumnDescriptor::new("rack", "Rack", DeepDive),
            ColumnDescriptor::new("supplier", "Supplier", DeepDive),
            ColumnDescriptor::new("cost", "Cost", DeepDive),
            ColumnDescriptor::new("purchaseDate", "Purchased", DeepDive),
            ColumnDescriptor::new("warranty", "Warranty", DeepDive),
        ])
        .with_badge("status", BadgeKind::Status)
    }

    /// Columns for the shipments page.
    #[must_use]
    pub fn shipments() -> Self {
        use DetailLevel::{DeepDive, Drilldown, Summary};
        Self::new(vec![
            ColumnDescriptor::new("orderNumber", "Order", Summary),
            ColumnDescriptor::new("supplier", "Supplier", Summary),
            ColumnDescriptor::new("status", "Status", Summary),
            ColumnDescriptor::new("destination", "Destination", Drilldown),
            ColumnDescriptor::new("priority", "Priority", Drilldown),
            ColumnDescriptor::new("shipDate", "Ship Date", Drilldown),
            ColumnDescriptor::new("origin", "Origin", DeepDive),
            ColumnDescriptor::new("quantity", "Qty", DeepDive),
            ColumnDescriptor::new("cost", "Cost", DeepDive),
            ColumnDescriptor::new("trackingNumber", "Tracking", DeepDive),
        ])
        .with_badge("status", BadgeKind::Status)
    }

    /// Current detail level.
    #[must_use]
    pub const fn detail(&self) -> DetailLevel {
        self.detail
    }

    /// Jumps to `detail`.
    pub fn set_detail(&mut self, detail: DetailLevel) {
        self.detail = detail;
    }

    /// Cycles to the next detail level.
    pub fn next_detail(&mut self) {
        self.detail = self.detail.next();
    }

    /// Cycles to the previous detail level.
    pub fn prev_detail(&mut self) {
        self.detail = self.detail.prev();
    }

    /// Columns shown at the current detail level, in declaration order.
    pub fn visible_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        let detail = self.detail;
        self.columns.iter().filter(move |c| c.visible_at(detail))
    }

    /// Computes the view model for `records` under the store's filters.
    pub fn compute<R: Record>(
        &self,
        records: &[R],
        store: &FilterStore,
        badges: &BadgeRegistry,
    ) -> TableViewModel {
        let _span = tracing::debug_span!(
            "compute_table",
            detail = ?self.detail,
            total = records.len()
        )
        .entered();

        let columns: Vec<&ColumnDescriptor> = self.visible_columns().collect();
        let visible = store.apply(records);

        let rows: Vec<RowView> = visible
            .iter()
            .map(|record| RowView {
                cells: columns
                    .iter()
                    .map(|c| {
                        record
                            .field(&c.key)
                            .map(|v| v.to_text().into_owned())
                            .unwrap_or_default()
                    })
                    .collect(),
                badge: self.badge_column.as_ref().and_then(|(field, kind)| {
                    record
                        .field(field)
                        .map(|v| badges.lookup(*kind, &v.to_text()).clone())
                }),
            })
            .collect();

        let empty_state = if records.is_empty() {
            Some(EmptyState {
                message: "No records loaded".to_string(),
                subtitle: "Records appear here once the page has data".to_string(),
            })
        } else if rows.is_empty() {
            Some(EmptyState {
                message: "No matching records".to_string(),
                subtitle: format!("Clear filters to see all {} records", records.len()),
            })
        } else {
            None
        };

        TableViewModel {
            columns: columns.iter().map(|c| c.label.clone()).collect(),
            visible_count: rows.len(),
            rows,
            detail: self.detail,
            total_count: records.len(),
            active_filters: store.active_filter_count(),
            empty_state,
        }
    }
}

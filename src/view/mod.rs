//! Table presentation.
//!
//! [`TableView`] owns a table's columns and detail level and turns records
//! plus a [`FilterStore`](crate::filter::FilterStore) into a
//! [`TableViewModel`]: the visible rows, their cells and badges, counts and an
//! empty state.

pub mod table;
pub mod viewmodel;

pub use table::{ColumnDescriptor, TableView};
pub use viewmodel::{EmptyState, RowView, TableViewModel};

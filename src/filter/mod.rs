//! Client-side filtering of page records.
//!
//! ```text
//! filter control → FilterUpdate → FilterStore → CompiledFilter → visible rows
//! ```
//!
//! # Modules
//!
//! - [`schema`]: Which fields a page filters on, with default range bounds
//! - [`state`]: The filter criteria themselves
//! - [`store`]: Update, clear and "has active filters" for one page
//! - [`predicate`]: Compiling criteria to predicates and evaluating them
//! - [`facets`]: Options, counts and domains derived from the record set

pub mod facets;
pub mod predicate;
pub mod schema;
pub mod state;
pub mod store;

pub use facets::{facet_counts, facet_options, numeric_domain};
pub use predicate::{filter_records, matches, CompiledFilter, Predicate};
pub use schema::{FilterSchema, FlagCondition, NumericRange, RangeSpec};
pub use state::{DateRange, FilterState};
pub use store::{FilterStore, FilterUpdate};

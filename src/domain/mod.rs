//! Domain layer for the OCULUS dashboards.
//!
//! Holds the types every other layer speaks in, independent of storage or
//! rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`identity`]: Application identity and theme enums
//! - [`record`]: The [`Record`] trait and field values
//! - [`inventory`]: Typed inventory and shipment rows
//!
//! # Examples
//!
//! ```
//! use oculus::domain::{AppId, FieldValue, Record, Shipment};
//! use chrono::NaiveDate;
//!
//! let shipment = Shipment {
//!     order_number: "PO-1001".to_string(),
//!     supplier: "Dell Technologies".to_string(),
//!     origin: "Austin".to_string(),
//!     destination: "DC-East".to_string(),
//!     status: "in-transit".to_string(),
//!     priority: "high".to_string(),
//!     quantity: 40,
//!     cost: 120_000.0,
//!     ship_date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
//!     tracking_number: None,
//! };
//! assert_eq!(shipment.field("status"), Some(FieldValue::Text("in-transit")));
//! assert_eq!(AppId::from_path("/flow/orders"), AppId::Flow);
//! ```

pub mod error;
pub mod identity;
pub mod inventory;
pub mod record;

pub use error::{OculusError, Result};
pub use identity::{AppId, ThemeMode};
pub use inventory::{InventoryItem, Shipment, NO_WARRANTY};
pub use record::{DynamicRecord, FieldValue, Record, Value};

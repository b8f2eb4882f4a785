//! Typed rows shown by the inventory and supply-chain pages.
//!
//! Each row type maps its fields onto the names used by the page's
//! [`FilterSchema`](crate::filter::FilterSchema). Field names are the
//! camel-cased keys the dashboard pages use for their columns.

use super::record::{FieldValue, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel used by inventory feeds for "no warranty on file".
pub const NO_WARRANTY: &str = "N/A";

/// A server or rack unit in the data-center inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Asset tag.
    pub id: String,
    pub hostname: String,
    pub rack: String,
    pub location: String,
    pub status: String,
    pub supplier: String,
    pub model: String,
    /// Support contract tier (`platinum`, `gold`, ...).
    pub service_level: String,
    /// Purchase cost in USD.
    pub cost: f64,
    pub cpu_cores: u32,
    pub purchase_date: NaiveDate,
    /// Warranty expiry as a date string, or [`NO_WARRANTY`].
    pub warranty: String,
}

impl Record for InventoryItem {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(&self.id),
            "hostname" => FieldValue::Text(&self.hostname),
            "rack" => FieldValue::Text(&self.rack),
            "location" => FieldValue::Text(&self.location),
            "status" => FieldValue::Text(&self.status),
            "supplier" => FieldValue::Text(&self.supplier),
            "model" => FieldValue::Text(&self.model),
            "serviceLevel" => FieldValue::Text(&self.service_level),
            "cost" => FieldValue::Number(self.cost),
            "cpuCores" => FieldValue::Number(f64::from(self.cpu_cores)),
            "purchaseDate" => FieldValue::Date(self.purchase_date),
            "warranty" => FieldValue::Text(&self.warranty),
            _ => return None,
        };
        Some(value)
    }
}

/// An inbound hardware shipment tracked by the supply-chain pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Purchase order number, unique per shipment.
    pub order_number: String,
    pub supplier: String,
    pub origin: String,
    pub destination: String,
    pub status: String,
    /// Handling priority (`critical`, `high`, `medium`, `low`).
    pub priority: String,
    pub quantity: u32,
    pub cost: f64,
    pub ship_date: NaiveDate,
    /// Carrier tracking number, absent until the order ships.
    #[serde(default)]
    pub tracking_number: Option<String>,
}

impl Record for Shipment {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "orderNumber" => FieldValue::Text(&self.order_number),
            "supplier" => FieldValue::Text(&self.supplier),
            "origin" => FieldValue::Text(&self.origin),
            "destination" => FieldValue::Text(&self.destination),
            "status" => FieldValue::Text(&self.status),
            "priority" => FieldValue::Text(&self.priority),
            "quantity" => FieldValue::Number(f64::from(self.quantity)),
            "cost" => FieldValue::Number(self.cost),
            "shipDate" => FieldValue::Date(self.ship_date),
            "trackingNumber" => FieldValue::Text(self.tracking_number.as_deref()?),
            _ => return None,
        };
        Some(value)
    }
}

//! End-to-end filtering scenarios over the inventory and shipment pages.

use chrono::NaiveDate;
use oculus::domain::{DynamicRecord, InventoryItem, Shipment, Value, NO_WARRANTY};
use oculus::filter::{
    filter_records, DateRange, FilterSchema, FilterState, FilterStore, FilterUpdate, NumericRange,
};
use std::collections::BTreeSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn server(id: &str, status: &str, supplier: &str, cost: f64, warranty: &str) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        hostname: format!("{id}.dc1"),
        rack: "R12".to_string(),
        location: "DC-East".to_string(),
        status: status.to_string(),
        supplier: supplier.to_string(),
        model: "PowerEdge R750".to_string(),
        service_level: "gold".to_string(),
        cost,
        cpu_cores: 64,
        purchase_date: date(2023, 6, 1),
        warranty: warranty.to_string(),
    }
}

fn shipment(order: &str, status: &str, ship_date: NaiveDate, tracking: Option<&str>) -> Shipment {
    Shipment {
        order_number: order.to_string(),
        supplier: "Dell Technologies".to_string(),
        origin: "Austin".to_string(),
        destination: "DC-East".to_string(),
        status: status.to_string(),
        priority: "high".to_string(),
        quantity: 12,
        cost: 48_000.0,
        ship_date,
        tracking_number: tracking.map(str::to_string),
    }
}

fn values(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn status_facet_and_cost_range_combine() {
    let records = vec![
        DynamicRecord::from([
            ("status".to_string(), Value::from("active")),
            ("cost".to_string(), Value::from(100.0)),
        ]),
        DynamicRecord::from([
            ("status".to_string(), Value::from("delayed")),
            ("cost".to_string(), Value::from(600.0)),
        ]),
    ];
    let schema = FilterSchema::new().with_facet("status", "status").with_range(
        "cost",
        "cost",
        0.0,
        500_000.0,
    );
    let mut store = FilterStore::new(schema);

    store.update(FilterUpdate::MultiSelect {
        facet: "status".to_string(),
        values: values(&["active"]),
    });
    store.update(FilterUpdate::Range {
        name: "cost".to_string(),
        range: NumericRange::new(0.0, 500.0),
    });

    assert_eq!(store.apply(&records), vec![&records[0]]);
    assert_eq!(store.active_filter_count(), 2);
}

#[test]
fn search_matches_supplier_case_insensitively() {
    let records = vec![
        server("srv-001", "active", "Dell Technologies", 9_000.0, "2027-01-01"),
        server("srv-002", "active", "HPE", 8_500.0, "2027-01-01"),
    ];
    let mut store = FilterStore::new(FilterSchema::inventory());
    store.update(FilterUpdate::Search("dell".to_string()));

    let visible = store.apply(&records);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].supplier, "Dell Technologies");
}

#[test]
fn range_bounds_are_inclusive() {
    let records = vec![
        server("a", "active", "HPE", 999.0, NO_WARRANTY),
        server("b", "active", "HPE", 1_000.0, NO_WARRANTY),
        server("c", "active", "HPE", 2_000.0, NO_WARRANTY),
        server("d", "active", "HPE", 2_001.0, NO_WARRANTY),
    ];
    let mut store = FilterStore::new(FilterSchema::inventory());
    store.update(FilterUpdate::Range {
        name: "cost".to_string(),
        range: NumericRange::new(1_000.0, 2_000.0),
    });

    let ids: Vec<&str> = store.apply(&records).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["b", "c"]);
}

#[test]
fn warranty_flag_excludes_sentinel() {
    let records = vec![
        server("covered", "active", "HPE", 1.0, "2026-12-31"),
        server("expired", "active", "HPE", 1.0, NO_WARRANTY),
    ];
    let mut store = FilterStore::new(FilterSchema::inventory());
    store.update(FilterUpdate::Flag {
        name: "hasWarranty".to_string(),
        enabled: true,
    });

    let ids: Vec<&str> = store.apply(&records).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["covered"]);
}

#[test]
fn shipment_page_combines_date_window_and_tracking() {
    let records = vec![
        shipment("PO-1", "in-transit", date(2024, 3, 1), Some("1Z999")),
        shipment("PO-2", "in-transit", date(2024, 3, 15), None),
        shipment("PO-3", "delayed", date(2024, 3, 31), Some("1Z123")),
        shipment("PO-4", "delivered", date(2024, 4, 1), Some("1Z456")),
    ];
    let mut store = FilterStore::new(FilterSchema::shipments());

    store.update(FilterUpdate::DateRange(DateRange::new(
        Some(date(2024, 3, 1)),
        Some(date(2024, 3, 31)),
    )));
    store.update(FilterUpdate::Flag {
        name: "tracked".to_string(),
        enabled: true,
    });

    let orders: Vec<&str> = store
        .apply(&records)
        .iter()
        .map(|r| r.order_number.as_str())
        .collect();
    assert_eq!(orders, ["PO-1", "PO-3"]);

    store.update(FilterUpdate::Flag {
        name: "delayedOnly".to_string(),
        enabled: true,
    });
    assert_eq!(store.apply(&records).len(), 1);

    store.clear();
    assert!(!store.has_active_filters());
    assert_eq!(store.apply(&records).len(), records.len());
}

#[test]
fn single_select_and_multi_select_mix() {
    let records = vec![
        shipment("PO-1", "in-transit", date(2024, 3, 1), None),
        shipment("PO-2", "delayed", date(2024, 3, 2), None),
        shipment("PO-3", "delivered", date(2024, 3, 3), None),
    ];
    let schema = FilterSchema::shipments();
    let mut state = FilterState::for_schema(&schema);
    state
        .multi_select
        .insert("status".to_string(), values(&["delayed", "delivered"]));
    state
        .single_select
        .insert("priority".to_string(), "high".to_string());

    let orders: Vec<&str> = filter_records(&records, &state, &schema)
        .iter()
        .map(|r| r.order_number.as_str())
        .collect();
    assert_eq!(orders, ["PO-2", "PO-3"]);

    state
        .single_select
        .insert("priority".to_string(), "low".to_string());
    assert!(filter_records(&records, &state, &schema).is_empty());
}

#[test]
fn toggling_facet_values_adds_and_removes() {
    let records = vec![
        server("a", "active", "HPE", 1.0, NO_WARRANTY),
        server("b", "retired", "HPE", 1.0, NO_WARRANTY),
        server("c", "maintenance", "HPE", 1.0, NO_WARRANTY),
    ];
    let mut store = FilterStore::new(FilterSchema::inventory());

    assert!(store.toggle_facet_value("status", "active"));
    assert!(store.toggle_facet_value("status", "retired"));
    assert_eq!(store.apply(&records).len(), 2);

    assert!(store.toggle_facet_value("status", "active"));
    assert!(store.toggle_facet_value("status", "retired"));
    assert!(!store.has_active_filters());
    assert_eq!(store.apply(&records).len(), 3);
}

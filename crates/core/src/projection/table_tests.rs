// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::projection::{ResourceType, SERVICE_TEMPLATE};
use serde_json::Value;

fn descriptor(path: &str, operation: &str) -> ResourceDescriptor {
    ResourceDescriptor {
        resource_type: ResourceType::Api,
        resource_method: "get".to_string(),
        resource_path: path.to_string(),
        service_name: format!("{}-rest-api", operation),
        service_public: true,
        service_template: SERVICE_TEMPLATE.to_string(),
        service_schedule: None,
        service_tag: None,
        service_policy: Value::Null,
        service_runtime: "nodejs12.x".to_string(),
        operation_name: operation.to_string(),
        description: operation.to_string(),
    }
}

#[test]
fn empty_table() {
    let table = ResourceTable::new();
    assert!(table.is_empty());
    assert_eq!(table.descriptor_count(), 0);
    assert!(table.into_groups().is_empty());
}

#[test]
fn groups_by_path_in_first_seen_order() {
    let mut table = ResourceTable::new();
    table.push(descriptor("/orders", "listOrders"));
    table.push(descriptor("/items", "listItems"));
    table.push(descriptor("/orders", "createOrder"));

    assert_eq!(table.len(), 2);
    assert_eq!(table.descriptor_count(), 3);
    assert_eq!(table.paths().collect::<Vec<_>>(), vec!["/orders", "/items"]);

    let orders: Vec<&str> = table
        .get("/orders")
        .unwrap()
        .iter()
        .map(|d| d.operation_name.as_str())
        .collect();
    assert_eq!(orders, vec!["listOrders", "createOrder"]);
    assert!(table.get("/missing").is_none());
}

#[test]
fn into_groups_carries_positional_flags() {
    let mut table = ResourceTable::new();
    table.push(descriptor("/items", "f1"));
    table.push(descriptor("/items", "f2"));
    table.push(descriptor("/solo", "f3"));

    let groups = table.into_groups();
    assert_eq!(groups.len(), 2);

    let items = &groups[0];
    assert_eq!(items.resource_path, "/items");
    assert!(!items.resource_data.is_empty());
    assert_eq!(items.resource_data.items[0].item.operation_name, "f1");
    assert!(items.resource_data.items[0].is_first);
    assert!(items.resource_data.items[0].has_more);
    assert_eq!(items.resource_data.items[1].item.operation_name, "f2");
    assert!(items.resource_data.items[1].is_last);

    let solo = &groups[1].resource_data.items[0];
    assert!(solo.is_first && solo.is_last && !solo.has_more);
}

#[test]
fn path_group_serializes_for_templates() {
    let mut table = ResourceTable::new();
    table.push(descriptor("/items", "f1"));
    let value = serde_json::to_value(table.into_groups()).unwrap();

    assert_eq!(value[0]["ResourcePath"], "/items");
    assert_eq!(value[0]["ResourceData"]["isEmpty"], false);
    let item = &value[0]["ResourceData"]["items"][0];
    assert_eq!(item["ResourceType"], "x-api");
    assert_eq!(item["OperationName"], "f1");
    assert_eq!(item["isFirst"], true);
    assert!(item.get("ServiceSchedule").is_none());
}

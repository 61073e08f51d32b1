// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn empty_group() {
    let group: Group<u32> = Group::new(Vec::new());
    assert!(group.is_empty());
    assert_eq!(group.len(), 0);
    assert_eq!(
        serde_json::to_value(&group).unwrap(),
        json!({ "items": [], "isEmpty": true })
    );
}

#[test]
fn single_item_is_first_and_last() {
    let group = Group::new(vec!["a"]);
    let only = &group.items[0];
    assert!(only.is_first);
    assert!(only.is_last);
    assert!(!only.has_more);
    assert!(!group.is_empty());
}

#[test]
fn flags_across_three_items() {
    let group = Group::from(vec![1, 2, 3]);
    let flags: Vec<(bool, bool, bool)> = group
        .items
        .iter()
        .map(|p| (p.is_first, p.is_last, p.has_more))
        .collect();
    assert_eq!(
        flags,
        vec![
            (true, false, true),
            (false, false, true),
            (false, true, false),
        ]
    );
    assert_eq!(group.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn item_fields_flatten_next_to_flags() {
    #[derive(Serialize)]
    struct Item {
        name: &'static str,
    }

    let group = Group::new(vec![Item { name: "x" }, Item { name: "y" }]);
    assert_eq!(
        serde_json::to_value(&group).unwrap(),
        json!({
            "items": [
                { "name": "x", "isFirst": true, "isLast": false, "hasMore": true },
                { "name": "y", "isFirst": false, "isLast": true, "hasMore": false },
            ],
            "isEmpty": false,
        })
    );
}

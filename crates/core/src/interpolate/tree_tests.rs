// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

fn context() -> Value {
    json!({
        "service": "my-shop",
        "provider": { "stage": "prod", "memorySize": 256 },
        "resources": {
            "Resources": {
                "OrdersTable": {
                    "Type": "AWS::DynamoDB::Table",
                    "Properties": { "TableName": "${self:service}-${self:provider.stage}" },
                },
            },
        },
    })
}

#[test]
fn absent_stays_absent() {
    assert_eq!(interpolate(None, &context(), &Options::new()), None);
}

#[test]
fn empty_structures_stay_empty() {
    let ctx = context();
    assert_eq!(
        interpolate(Some(&json!({})), &ctx, &Options::new()),
        Some(json!({}))
    );
    assert_eq!(
        interpolate(Some(&json!([])), &ctx, &Options::new()),
        Some(json!([]))
    );
}

#[test]
fn resolves_nested_strings() {
    let ctx = context();
    let node = json!({
        "Type": "AWS::S3::Bucket",
        "Properties": {
            "BucketName": "${self:service}-assets-${opt:stage, self:provider.stage}",
            "Tags": [
                { "Key": "stage", "Value": "${self:provider.stage}" },
                { "Key": "size", "Value": "${self:provider.memorySize}" },
            ],
            "Versioned": true,
            "Replicas": 2,
            "Extra": null,
        },
    });

    let resolved = interpolate_value(&node, &ctx, &Options::new());
    assert_eq!(
        resolved,
        json!({
            "Type": "AWS::S3::Bucket",
            "Properties": {
                "BucketName": "my-shop-assets-prod",
                "Tags": [
                    { "Key": "stage", "Value": "prod" },
                    { "Key": "size", "Value": "256" },
                ],
                "Versioned": true,
                "Replicas": 2,
                "Extra": null,
            },
        })
    );
}

#[test]
fn keys_are_not_interpolated() {
    let ctx = context();
    let node = json!({ "${self:service}": "${self:service}" });
    assert_eq!(
        interpolate_value(&node, &ctx, &Options::new()),
        json!({ "${self:service}": "my-shop" })
    );
}

#[test]
fn sibling_references_use_original_tree() {
    // Lookup lands on raw placeholder text, which is resolved in turn
    let ctx = context();
    let node = json!({ "Name": "${self:resources.Resources.OrdersTable.Properties.TableName}" });
    assert_eq!(
        interpolate_value(&node, &ctx, &Options::new()),
        json!({ "Name": "my-shop-prod" })
    );
}

#[test]
fn sequence_order_preserved() {
    let ctx = context();
    let node = json!(["${self:provider.stage}", "b", "${self:service}"]);
    assert_eq!(
        interpolate_value(&node, &ctx, &Options::new()),
        json!(["prod", "b", "my-shop"])
    );
}

use proptest::prelude::*;

fn arb_plain_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 {}:.-]*".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn placeholder_free_tree_is_unchanged(tree in arb_plain_tree()) {
        let ctx = context();
        prop_assert_eq!(interpolate_value(&tree, &ctx, &Options::new()), tree);
    }

    #[test]
    fn interpolation_is_idempotent(tree in arb_plain_tree(), stage in "[a-z]{1,8}") {
        let ctx = json!({ "stage": stage });
        let node = json!({ "name": "svc-${self:stage}", "inner": tree });
        let once = interpolate_value(&node, &ctx, &Options::new());
        let twice = interpolate_value(&once, &ctx, &Options::new());
        prop_assert_eq!(once, twice);
    }
}

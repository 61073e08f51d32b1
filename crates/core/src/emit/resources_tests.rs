// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::interpolate::Resolver;
use crate::options::Options;
use crate::spec::load_spec;

fn info() -> ProjectInfo {
    let spec = load_spec("service: my-shop\nprovider: {}\nresources: { Resources: {} }\nfunctions: {}\n")
        .unwrap();
    let options = Options::new();
    ProjectInfo::from_spec(&spec, &Resolver::new(spec.root(), &options))
}

fn sample() -> ResourceSet {
    ResourceSet::new(
        &info(),
        vec![
            ("OrdersTable".to_string(), json!({ "Type": "AWS::DynamoDB::Table" })),
            ("AssetsBucket".to_string(), json!({ "Type": "AWS::S3::Bucket" })),
        ],
        Some(json!([{ "Effect": "Allow", "Action": ["s3:GetObject"], "Resource": "*" }])),
    )
}

#[test]
fn policy_wraps_statements() {
    let set = sample();
    assert_eq!(set.policy_name, "MyShopIAMPolicy");
    assert_eq!(set.policy["Type"], "AWS::IAM::ManagedPolicy");
    assert_eq!(
        set.policy["Properties"]["PolicyDocument"]["Statement"][0]["Action"][0],
        "s3:GetObject"
    );
    assert_eq!(set.policy["Properties"]["PolicyDocument"]["Version"], POLICY_VERSION);
}

#[test]
fn missing_statements_give_empty_list() {
    let set = ResourceSet::new(&info(), Vec::new(), None);
    assert_eq!(
        set.policy["Properties"]["PolicyDocument"]["Statement"],
        json!([])
    );
}

#[test]
fn names_put_policy_last() {
    let set = sample();
    assert_eq!(
        set.names().collect::<Vec<_>>(),
        vec!["OrdersTable", "AssetsBucket", "MyShopIAMPolicy"]
    );
    assert!(set.get("OrdersTable").is_some());
    assert!(set.get("MyShopIAMPolicy").is_some());
    assert!(set.get("Nope").is_none());
}

#[test]
fn document_has_resources_and_outputs() {
    let set = sample();
    let doc = set.to_document(&info());

    assert_eq!(doc["AWSTemplateFormatVersion"], TEMPLATE_FORMAT_VERSION);
    assert_eq!(doc["Description"], "My Shop resources");
    assert_eq!(doc["Resources"]["OrdersTable"]["Type"], "AWS::DynamoDB::Table");
    assert_eq!(doc["Resources"]["MyShopIAMPolicy"], set.policy);
    assert_eq!(
        doc["Outputs"]["AssetsBucket"],
        json!({ "Value": { "Ref": "AssetsBucket" } })
    );
    assert_eq!(
        doc["Outputs"]["MyShopIAMPolicy"],
        json!({ "Value": { "Ref": "MyShopIAMPolicy" } })
    );

    let keys: Vec<&String> = doc["Resources"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["OrdersTable", "AssetsBucket", "MyShopIAMPolicy"]);
}

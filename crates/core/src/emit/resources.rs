// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved resource set and the resources document

use crate::project::ProjectInfo;
use serde_json::{json, Map, Value};

const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";
const POLICY_VERSION: &str = "2012-10-17";

/// Interpolated resource bodies plus the synthesized IAM policy
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSet {
    /// Named resource bodies in declaration order
    pub resources: Vec<(String, Value)>,
    /// Key of the policy resource, e.g. `MyShopIAMPolicy`
    pub policy_name: String,
    /// Policy resource body
    pub policy: Value,
}

impl ResourceSet {
    /// Assemble the set from resolved bodies and resolved IAM statements.
    ///
    /// Absent statements produce a policy with an empty statement list.
    pub fn new(
        info: &ProjectInfo,
        resources: Vec<(String, Value)>,
        statements: Option<Value>,
    ) -> Self {
        let policy_name = info.policy_resource_name();
        let policy = json!({
            "Type": "AWS::IAM::ManagedPolicy",
            "Properties": {
                "ManagedPolicyName": policy_name,
                "Description": format!("{} service policy", info.project_desc),
                "PolicyDocument": {
                    "Version": POLICY_VERSION,
                    "Statement": statements.unwrap_or_else(|| json!([])),
                },
            },
        });

        Self {
            resources,
            policy_name,
            policy,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        if name == self.policy_name {
            return Some(&self.policy);
        }
        self.resources
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, body)| body)
    }

    /// Resource names in output order, policy last
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources
            .iter()
            .map(|(name, _)| name.as_str())
            .chain(std::iter::once(self.policy_name.as_str()))
    }

    /// The full resources document with `Resources` and matching `Outputs`
    pub fn to_document(&self, info: &ProjectInfo) -> Value {
        let mut resources = Map::new();
        for (name, body) in &self.resources {
            resources.insert(name.clone(), body.clone());
        }
        resources.insert(self.policy_name.clone(), self.policy.clone());

        let outputs: Map<String, Value> = self
            .names()
            .map(|name| (name.to_string(), json!({ "Value": { "Ref": name } })))
            .collect();

        json!({
            "AWSTemplateFormatVersion": TEMPLATE_FORMAT_VERSION,
            "Description": format!("{} resources", info.project_desc),
            "Resources": resources,
            "Outputs": outputs,
        })
    }
}

#[cfg(test)]
#[path = "resources_tests.rs"]
mod tests;

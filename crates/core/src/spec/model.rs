// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed views over a validated document

use serde_json::{Map, Value};

/// Runtime used when the provider block does not name one
pub const DEFAULT_RUNTIME: &str = "nodejs12.x";

/// A loaded, validated serverless document.
///
/// Owns the raw tree; every accessor borrows from it.
#[derive(Debug, Clone)]
pub struct ServerlessSpec {
    root: Value,
}

impl ServerlessSpec {
    pub(super) fn new(root: Value) -> Self {
        Self { root }
    }

    /// The whole document, used as the `self:` context
    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn service(&self) -> &str {
        self.root
            .get("service")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn provider(&self) -> Provider<'_> {
        Provider {
            block: self.root.get("provider").and_then(Value::as_object),
        }
    }

    /// Named resource bodies in declaration order
    pub fn resources(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.root
            .get("resources")
            .and_then(|r| r.get("Resources"))
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .map(|(name, body)| (name.as_str(), body))
    }

    /// Function definitions in declaration order
    pub fn functions(&self) -> impl Iterator<Item = FunctionDef<'_>> {
        self.root
            .get("functions")
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .map(|(name, body)| FunctionDef { name, body })
    }
}

/// The `provider` block
#[derive(Debug, Clone, Copy)]
pub struct Provider<'a> {
    block: Option<&'a Map<String, Value>>,
}

impl<'a> Provider<'a> {
    fn str_field(&self, key: &str) -> Option<&'a str> {
        self.block
            .and_then(|b| b.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn runtime(&self) -> Option<&'a str> {
        self.str_field("runtime")
    }

    pub fn region(&self) -> Option<&'a str> {
        self.str_field("region")
    }

    pub fn profile(&self) -> Option<&'a str> {
        self.str_field("profile")
    }

    pub fn stage(&self) -> Option<&'a str> {
        self.str_field("stage")
    }

    /// Raw IAM statements, absent when the provider declares none
    pub fn iam_role_statements(&self) -> Option<&'a Value> {
        self.block.and_then(|b| b.get("iamRoleStatements"))
    }
}

/// A named function definition
#[derive(Debug, Clone, Copy)]
pub struct FunctionDef<'a> {
    pub name: &'a str,
    pub body: &'a Value,
}

impl<'a> FunctionDef<'a> {
    /// Declared trigger events; empty when the function has none
    pub fn events(&self) -> &'a [Value] {
        self.body
            .get("events")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

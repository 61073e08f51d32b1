// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive interpolation of mappings and sequences

use super::resolver::Resolver;
use crate::options::Options;
use serde_json::Value;

impl Resolver<'_> {
    /// Return a copy of `node` with every string leaf resolved.
    ///
    /// Mapping keys are never interpolated. Non-string scalars are copied.
    pub fn interpolate(&self, node: &Value) -> Value {
        match node {
            Value::String(s) => Value::String(self.resolve(s)),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.interpolate(v)).collect()),
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), self.interpolate(v)))
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

/// Interpolate an optional node; absent input stays absent.
pub fn interpolate(node: Option<&Value>, context: &Value, options: &Options) -> Option<Value> {
    node.map(|n| interpolate_value(n, context, options))
}

/// Interpolate a present node.
pub fn interpolate_value(node: &Value, context: &Value, options: &Options) -> Value {
    Resolver::new(context, options).interpolate(node)
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;

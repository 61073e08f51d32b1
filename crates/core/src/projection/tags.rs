// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tag list normalization for catch-all events

use serde_json::Value;

/// Flatten an event payload into a uniform list of tag entries.
///
/// - scalar → `[<scalar>]`
/// - sequence → `Key=<index>;Value=<k>(<v>)...` per element
/// - mapping → `Key=<k>;Value=<v>` per key
/// - null → no tags
///
/// Every payload shape is accepted.
pub fn normalize_tags(payload: &Value) -> Vec<String> {
    match payload {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| format!("Key={};Value={}", idx, element_text(item)))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| format!("Key={};Value={}", key, scalar_text(value)))
            .collect(),
        scalar => vec![scalar_text(scalar)],
    }
}

fn element_text(item: &Value) -> String {
    match item {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| format!("{}({})", key, scalar_text(value)))
            .collect(),
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;

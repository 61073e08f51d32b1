// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Externally supplied options for `opt:` placeholders

use serde_json::{Map, Value};

/// Options mapping consulted by `${opt:...}` candidates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    root: Value,
}

impl Options {
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Build from `key=value` pairs, in order; later keys win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut options = Self::new();
        for (key, value) in pairs {
            options.set(key.as_ref(), value);
        }
        options
    }

    /// Insert a value under a dotted key, creating nested mappings.
    ///
    /// `set("deploy.stage", "prod")` makes `${opt:deploy.stage}` resolve to
    /// `prod`. A scalar in the way of a nested key is replaced by a mapping.
    pub fn set(&mut self, dotted_key: &str, value: impl Into<String>) {
        let mut segments: Vec<&str> = dotted_key.split('.').collect();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut node = &mut self.root;
        for segment in segments {
            make_object(node);
            node = &mut node[segment];
        }
        make_object(node);
        node[last] = Value::String(value.into());
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }
}

impl From<Value> for Options {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

fn make_object(node: &mut Value) {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;

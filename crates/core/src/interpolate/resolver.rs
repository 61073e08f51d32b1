// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reference resolution for a single string value

use super::segment::{parse_segments, Segment};
use crate::options::Options;
use serde_json::Value;
use tracing::warn;

/// How many times a resolved value may itself be resolved again.
///
/// Past this depth the text is returned as-is, which ends reference cycles
/// such as `a: ${self:a}`.
pub const MAX_DEPTH: usize = 16;

/// Resolve every placeholder in `value` against `context` and `options`.
pub fn resolve(value: &str, context: &Value, options: &Options) -> String {
    Resolver::new(context, options).resolve(value)
}

/// Resolves placeholders against one document and one options mapping.
///
/// All lookups target the trees handed to [`Resolver::new`], never a
/// partially resolved copy.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    context: &'a Value,
    options: &'a Value,
}

impl<'a> Resolver<'a> {
    pub fn new(context: &'a Value, options: &'a Options) -> Self {
        Self {
            context,
            options: options.as_value(),
        }
    }

    /// Resolve every placeholder in `value`; strings without one are returned unchanged.
    pub fn resolve(&self, value: &str) -> String {
        self.resolve_at(value, 0)
    }

    fn resolve_at(&self, value: &str, depth: usize) -> String {
        let segments = parse_segments(value);
        if !segments.iter().any(Segment::is_placeholder) {
            return value.to_string();
        }
        if depth >= MAX_DEPTH {
            warn!(value, "placeholder nesting too deep, leaving value unresolved");
            return value.to_string();
        }

        let mut out = String::with_capacity(value.len());
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(expr) => {
                    let selected = self.select(expr);
                    out.push_str(&self.resolve_at(&selected, depth + 1));
                }
            }
        }
        out
    }

    /// First non-empty candidate result, or the empty string.
    fn select(&self, expr: &str) -> String {
        expr.split(',')
            .map(str::trim)
            .map(|candidate| self.candidate(candidate))
            .find(|text| !text.is_empty())
            .unwrap_or_default()
    }

    fn candidate(&self, candidate: &str) -> String {
        if let Some(path) = candidate.strip_prefix("self:") {
            text_of(lookup(self.context, path))
        } else if let Some(path) = candidate.strip_prefix("opt:") {
            text_of(lookup(self.options, path))
        } else {
            candidate
                .trim_matches(|c| c == '\'' || c == '"')
                .to_string()
        }
    }
}

/// Walk a dotted path. Any missing key or non-container on the way yields `None`.
fn lookup<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    let mut node = root;
    for raw in path.split('.') {
        let key = raw.trim();
        let key = key
            .strip_prefix("self:")
            .or_else(|| key.strip_prefix("opt:"))
            .unwrap_or(key);

        node = match node {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Text form of a looked-up value; mappings and sequences become compact JSON.
fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

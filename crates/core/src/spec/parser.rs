// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! YAML parsing and section validation

use super::model::ServerlessSpec;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a document.
///
/// All of these are fatal: a conversion never starts from a partial document.
#[derive(Debug, Error)]
pub enum SpecError {
    /// YAML syntax error
    #[error("YAML syntax error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error reading file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A required section is absent
    #[error("missing required section: {0}")]
    MissingSection(String),

    /// A section is present with the wrong shape
    #[error("invalid section {section}: expected {expected}")]
    InvalidSection {
        section: String,
        expected: &'static str,
    },
}

/// Parse a document from YAML text.
///
/// # Example
///
/// ```ignore
/// let spec = load_spec(r#"
/// service: shop
/// provider: {}
/// resources:
///   Resources: {}
/// functions: {}
/// "#)?;
/// assert_eq!(spec.service(), "shop");
/// ```
pub fn load_spec(yaml: &str) -> Result<ServerlessSpec, SpecError> {
    let root: Value = serde_yaml::from_str(yaml)?;
    validate(&root)?;
    Ok(ServerlessSpec::new(root))
}

/// Parse a document from a YAML file.
pub fn load_spec_file(path: &Path) -> Result<ServerlessSpec, SpecError> {
    let content = std::fs::read_to_string(path).map_err(|e| SpecError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_spec(&content)
}

fn validate(root: &Value) -> Result<(), SpecError> {
    let root = root.as_object().ok_or(SpecError::InvalidSection {
        section: "<root>".to_string(),
        expected: "a mapping",
    })?;

    match root.get("service") {
        Some(Value::String(_)) => {}
        Some(_) => return Err(invalid("service", "a string")),
        None => return Err(SpecError::MissingSection("service".to_string())),
    }

    require_mapping(root.get("provider"), "provider")?;

    let resources = root
        .get("resources")
        .ok_or_else(|| SpecError::MissingSection("resources.Resources".to_string()))?;
    require_mapping(resources.get("Resources"), "resources.Resources")?;

    require_mapping(root.get("functions"), "functions")?;

    Ok(())
}

fn require_mapping(value: Option<&Value>, section: &str) -> Result<(), SpecError> {
    match value {
        Some(Value::Object(_)) => Ok(()),
        Some(_) => Err(invalid(section, "a mapping")),
        None => Err(SpecError::MissingSection(section.to_string())),
    }
}

fn invalid(section: &str, expected: &'static str) -> SpecError {
    SpecError::InvalidSection {
        section: section.to_string(),
        expected,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

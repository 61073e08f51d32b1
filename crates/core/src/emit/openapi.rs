// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! API-surface document rendering.
//!
//! The document is rendered with minijinja from an embedded template. The
//! template walks `ResourcePaths` and relies on the explicit `isEmpty`,
//! `isFirst`, `isLast` and `hasMore` flags carried by each group.

use super::EmitError;
use crate::project::ProjectInfo;
use crate::projection::PathGroup;
use minijinja::{Environment, Error, ErrorKind, Value};
use serde::Serialize;
use tracing::warn;

const OPENAPI_TEMPLATE: &str = include_str!("../../templates/openapi.yaml.j2");
const TEMPLATE_NAME: &str = "openapi.yaml";

/// Version stamped into generated documents
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
struct OpenApiContext<'a> {
    #[serde(flatten)]
    project: &'a ProjectInfo,
    #[serde(rename = "GeneratorVersion")]
    generator_version: &'static str,
    #[serde(rename = "ResourcePaths")]
    resource_paths: &'a [PathGroup],
}

/// Render the API-surface document.
///
/// The result is linted by parsing it back as YAML. A lint failure (for
/// example two routes declaring the same method on one path) is logged and
/// the document is still returned.
pub fn render_openapi(project: &ProjectInfo, paths: &[PathGroup]) -> Result<String, EmitError> {
    let env = create_env()?;
    let template = env.get_template(TEMPLATE_NAME)?;
    let content = template.render(OpenApiContext {
        project,
        generator_version: GENERATOR_VERSION,
        resource_paths: paths,
    })?;

    if let Err(e) = serde_yaml::from_str::<serde_yaml::Value>(&content) {
        warn!(error = %e, "generated API document is not valid YAML");
    }
    Ok(content)
}

fn create_env() -> Result<Environment<'static>, EmitError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("json", json_filter);
    env.add_template(TEMPLATE_NAME, OPENAPI_TEMPLATE)?;
    Ok(env)
}

/// Render any value as JSON, which is also a valid YAML flow scalar.
fn json_filter(value: Value) -> Result<String, Error> {
    serde_json::to_string(&value).map_err(|e| {
        Error::new(ErrorKind::InvalidOperation, "value cannot be rendered as JSON").with_source(e)
    })
}

#[cfg(test)]
#[path = "openapi_tests.rs"]
mod tests;

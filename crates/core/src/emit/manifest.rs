// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON side files for the resources deployment package

use super::openapi::GENERATOR_VERSION;
use crate::project::ProjectInfo;
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct ResourceInput<'a> {
    #[serde(flatten)]
    project: &'a ProjectInfo,
    #[serde(rename = "GeneratorVersion")]
    generator_version: &'static str,
}

/// `resource-input.json`: the project info plus the generator version
pub fn resource_input_json(project: &ProjectInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ResourceInput {
        project,
        generator_version: GENERATOR_VERSION,
    })
}

/// `package.json` for the resources package, named after the kebab project name
pub fn package_json(project: &ProjectInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "name": project.project_name_snake,
        "version": GENERATOR_VERSION,
        "description": format!("{} resources", project.project_desc),
        "private": true,
    }))
}

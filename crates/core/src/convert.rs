// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end conversion: document → resolved resources + resource table

use crate::emit::{
    package_json, render_openapi, resource_input_json, Artifacts, EmitError, ResourceSet,
};
use crate::interpolate::Resolver;
use crate::options::Options;
use crate::project::ProjectInfo;
use crate::projection::{project, ProviderContext, ResourceTable};
use crate::spec::{load_spec_file, ServerlessSpec, SpecError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that abort a conversion run
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// The derived data for one document
#[derive(Debug, Clone)]
pub struct Conversion {
    pub project: ProjectInfo,
    pub resources: ResourceSet,
    pub table: ResourceTable,
}

/// Resolve resources and policy, then project every function event.
///
/// Each resource body, the statement list, and each event are interpolated
/// independently against the original document, so no partially resolved
/// sibling is ever visible to a `self:` lookup.
pub fn convert(spec: &ServerlessSpec, options: &Options) -> Conversion {
    let resolver = Resolver::new(spec.root(), options);
    let project_info = ProjectInfo::from_spec(spec, &resolver);

    let resources: Vec<(String, serde_json::Value)> = spec
        .resources()
        .map(|(name, body)| {
            debug!(resource = name, "resolving resource");
            (name.to_string(), resolver.interpolate(body))
        })
        .collect();

    let statements = spec
        .provider()
        .iam_role_statements()
        .map(|s| resolver.interpolate(s));

    let provider = ProviderContext::from_spec(
        spec,
        &resolver,
        statements.clone().unwrap_or(serde_json::Value::Null),
    );
    let table = project(spec.functions(), &provider, &resolver);
    let resources = ResourceSet::new(&project_info, resources, statements);

    Conversion {
        project: project_info,
        resources,
        table,
    }
}

impl Conversion {
    /// Render every artifact in memory
    pub fn render(&self) -> Result<Artifacts, EmitError> {
        let document = self.resources.to_document(&self.project);
        let groups = self.table.clone().into_groups();

        Ok(Artifacts {
            resources_file: format!("{}.yaml", self.project.project_name),
            resources_yaml: serde_yaml::to_string(&document)?,
            package_json: package_json(&self.project)?,
            resource_input_json: resource_input_json(&self.project)?,
            openapi_yaml: render_openapi(&self.project, &groups)?,
        })
    }
}

/// Load `input`, convert, and write all artifacts under `output`.
///
/// Nothing is written unless loading, conversion, and rendering all succeed,
/// and a failed write removes whatever it had already placed.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &Options,
) -> Result<Vec<PathBuf>, ConvertError> {
    let spec = load_spec_file(input)?;
    let artifacts = convert(&spec, options).render()?;
    Ok(artifacts.write_to(output)?)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;

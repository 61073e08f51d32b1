// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project naming derived from the document

use crate::case::{to_kebab, to_pascal_case, to_text_space};
use crate::interpolate::Resolver;
use crate::spec::ServerlessSpec;
use serde::Serialize;

pub const DEFAULT_REGION: &str = "eu-west-1";
pub const DEFAULT_PROFILE: &str = "simplify-eu";
pub const DEFAULT_STAGE: &str = "dev";

/// Names and deployment target for the generated artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectInfo {
    /// `my-shop` → `MyShop`
    pub project_name: String,
    /// `my-shop` → `My Shop`
    pub project_desc: String,
    /// `my-shop` → `my-shop`
    pub project_name_snake: String,
    pub deployment_name: String,
    pub deployment_region: String,
    pub deployment_profile: String,
    pub deployment_stage: String,
}

impl ProjectInfo {
    /// Derive names from the document, resolving placeholders in the
    /// service name and provider fields first.
    pub fn from_spec(spec: &ServerlessSpec, resolver: &Resolver<'_>) -> Self {
        let provider = spec.provider();
        let resolved = |value: Option<&str>, default: &str| {
            value
                .map(|v| resolver.resolve(v))
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let project_name = to_pascal_case(&resolver.resolve(spec.service()));

        Self {
            project_desc: to_text_space(&project_name),
            project_name_snake: to_kebab(&project_name),
            deployment_name: format!("{}Demo", project_name),
            deployment_region: resolved(provider.region(), DEFAULT_REGION),
            deployment_profile: resolved(provider.profile(), DEFAULT_PROFILE),
            deployment_stage: resolved(provider.stage(), DEFAULT_STAGE),
            project_name,
        }
    }

    /// Key of the synthesized IAM policy resource
    pub fn policy_resource_name(&self) -> String {
        format!("{}IAMPolicy", self.project_name)
    }
}

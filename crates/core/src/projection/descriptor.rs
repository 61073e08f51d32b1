// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource descriptors

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Template family every descriptor is rendered with
pub const SERVICE_TEMPLATE: &str = "flatted";

/// Kind of resource a trigger maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceType {
    /// HTTP route
    #[serde(rename = "x-api")]
    Api,
    /// Scheduled or other non-HTTP event
    #[serde(rename = "x-event")]
    Event,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Api => "x-api",
            ResourceType::Event => "x-event",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (function, event) pairing, ready for template rendering.
///
/// Field names serialize in PascalCase (`ResourcePath`, `OperationName`, ...)
/// to match the API-surface template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceDescriptor {
    pub resource_type: ResourceType,
    /// Lowercase HTTP method; `patch` for events
    pub resource_method: String,
    /// Grouping key; never empty unless both function name and event key are
    pub resource_path: String,
    pub service_name: String,
    pub service_public: bool,
    pub service_template: String,
    /// Raw schedule expression, for `schedule` events only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_schedule: Option<Value>,
    /// Normalized tags, for catch-all events only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_tag: Option<Vec<String>>,
    /// Resolved provider-level IAM statements
    pub service_policy: Value,
    pub service_runtime: String,
    pub operation_name: String,
    pub description: String,
}

impl ResourceDescriptor {
    pub fn is_api(&self) -> bool {
        self.resource_type == ResourceType::Api
    }
}

impl fmt::Display for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:<6} {:<24} {}",
            self.resource_type, self.resource_method, self.operation_name, self.service_name
        )
    }
}

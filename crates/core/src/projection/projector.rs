// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classifying function events into descriptors

use super::descriptor::{ResourceDescriptor, ResourceType, SERVICE_TEMPLATE};
use super::table::ResourceTable;
use super::tags::normalize_tags;
use crate::case::{to_camel_case, to_kebab, to_pascal_case, to_text_space};
use crate::interpolate::Resolver;
use crate::spec::{FunctionDef, ServerlessSpec, DEFAULT_RUNTIME};
use serde_json::Value;
use tracing::{debug, warn};

/// Method used for every non-HTTP descriptor
const EVENT_METHOD: &str = "patch";

static NO_PAYLOAD: Value = Value::Null;

/// Provider-level values shared by every descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderContext {
    /// The document's `service` name
    pub service: String,
    pub runtime: String,
    /// Already-resolved IAM statements
    pub policy: Value,
}

impl ProviderContext {
    /// Resolve the service name and runtime from the document.
    pub fn from_spec(spec: &ServerlessSpec, resolver: &Resolver<'_>, policy: Value) -> Self {
        let runtime = spec
            .provider()
            .runtime()
            .map(|r| resolver.resolve(r))
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_RUNTIME.to_string());

        Self {
            service: resolver.resolve(spec.service()),
            runtime,
            policy,
        }
    }
}

/// Project every function event into a path-grouped table.
///
/// Each event is interpolated on its own against the resolver's original
/// document before it is classified. Functions without events contribute
/// nothing.
pub fn project<'a>(
    functions: impl IntoIterator<Item = FunctionDef<'a>>,
    provider: &ProviderContext,
    resolver: &Resolver<'_>,
) -> ResourceTable {
    let mut table = ResourceTable::new();

    for function in functions {
        let events = function.events();
        if events.is_empty() {
            debug!(function = function.name, "no events, skipping");
            continue;
        }

        for raw in events {
            let event = resolver.interpolate(raw);
            let descriptor = describe(function.name, &event, provider);
            debug!(
                function = function.name,
                path = %descriptor.resource_path,
                kind = %descriptor.resource_type,
                "projected event"
            );
            if is_duplicate_route(&table, &descriptor) {
                warn!(
                    function = function.name,
                    path = %descriptor.resource_path,
                    method = %descriptor.resource_method,
                    "method already declared on this path"
                );
            }
            table.push(descriptor);
        }
    }

    table
}

fn describe(function: &str, event: &Value, provider: &ProviderContext) -> ResourceDescriptor {
    let operation_name = to_camel_case(function);
    let description = to_text_space(&to_pascal_case(&operation_name));

    let mut descriptor = ResourceDescriptor {
        resource_type: ResourceType::Event,
        resource_method: EVENT_METHOD.to_string(),
        resource_path: String::new(),
        service_name: provider.service.clone(),
        service_public: false,
        service_template: SERVICE_TEMPLATE.to_string(),
        service_schedule: None,
        service_tag: None,
        service_policy: provider.policy.clone(),
        service_runtime: provider.runtime.clone(),
        operation_name,
        description,
    };

    if let Some(http) = field(event, "http") {
        let (method, path) = http_route(http);
        descriptor.resource_type = ResourceType::Api;
        descriptor.service_public = true;
        descriptor.service_name = format!("{}-rest-api", function);
        descriptor.resource_method = method.to_lowercase();
        descriptor.resource_path = if path.is_empty() {
            function.to_lowercase()
        } else {
            path.to_lowercase()
        };
    } else if let Some(schedule) = field(event, "schedule") {
        descriptor.service_schedule = Some(schedule.clone());
        descriptor.resource_path = format!("{}/event-rule", function);
    } else {
        let (key, payload) = sole_entry(event);
        descriptor.resource_path = format!("{}/{}", function, to_kebab(&to_pascal_case(key)));
        descriptor.service_tag = Some(normalize_tags(payload));
    }

    descriptor
}

fn is_duplicate_route(table: &ResourceTable, descriptor: &ResourceDescriptor) -> bool {
    table
        .get(&descriptor.resource_path)
        .is_some_and(|existing| {
            existing
                .iter()
                .any(|d| d.resource_method == descriptor.resource_method)
        })
}

/// A present, non-null field of an event mapping
fn field<'v>(event: &'v Value, key: &str) -> Option<&'v Value> {
    event.get(key).filter(|v| !v.is_null())
}

/// Method and path of an `http` event.
///
/// Accepts the mapping form (`{ method, path }`) and the `"GET /items"`
/// shorthand.
fn http_route(http: &Value) -> (&str, &str) {
    match http {
        Value::String(short) => {
            let short = short.trim();
            match short.split_once(char::is_whitespace) {
                Some((method, path)) => (method, path.trim()),
                None => ("", short),
            }
        }
        other => (
            other.get("method").and_then(Value::as_str).unwrap_or_default(),
            other.get("path").and_then(Value::as_str).unwrap_or_default(),
        ),
    }
}

/// The event's first key and its payload.
///
/// A bare string event (`- sqs`) is its own key with no payload.
fn sole_entry(event: &Value) -> (&str, &Value) {
    match event {
        Value::Object(map) => map
            .iter()
            .next()
            .map(|(key, payload)| (key.as_str(), payload))
            .unwrap_or(("", &NO_PAYLOAD)),
        Value::String(key) => (key.as_str(), &NO_PAYLOAD),
        _ => ("", &NO_PAYLOAD),
    }
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event projection: function triggers → path-grouped resource descriptors.
//!
//! Every (function, event) pair becomes one [`ResourceDescriptor`]:
//!
//! | event shape      | type      | method        | path                     |
//! |------------------|-----------|---------------|--------------------------|
//! | `http: {..}`     | `x-api`   | `http.method` | `http.path` (lowercased) |
//! | `schedule: expr` | `x-event` | `patch`       | `<func>/event-rule`      |
//! | `<key>: payload` | `x-event` | `patch`       | `<func>/<key-kebab>`     |
//!
//! Descriptors are grouped by path in first-seen order in a [`ResourceTable`].

mod descriptor;
mod group;
mod projector;
mod table;
mod tags;

pub use descriptor::{ResourceDescriptor, ResourceType, SERVICE_TEMPLATE};
pub use group::{Group, Positioned};
pub use projector::{project, ProviderContext};
pub use table::{PathGroup, ResourceTable};
pub use tags::normalize_tags;

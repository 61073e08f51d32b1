// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! simplify-core: serverless document conversion
//!
//! This crate provides:
//! - Placeholder resolution (`${self:..}`, `${opt:..}`, literal fallbacks)
//!   over whole configuration trees
//! - Projection of function events into path-grouped resource descriptors
//! - Rendering of the resolved resources and API-surface documents
//!
//! # Architecture
//!
//! ```text
//! YAML → spec → interpolate (resources, policy, events) → projection → emit
//! ```

pub mod case;
pub mod convert;
pub mod emit;
pub mod interpolate;
pub mod options;
pub mod project;
pub mod projection;
pub mod spec;

pub use convert::{convert, convert_file, ConvertError, Conversion};
pub use emit::{Artifacts, EmitError, ResourceSet};
pub use interpolate::{interpolate, interpolate_value, resolve, Resolver};
pub use options::Options;
pub use project::ProjectInfo;
pub use projection::{
    project, Group, PathGroup, Positioned, ProviderContext, ResourceDescriptor, ResourceTable,
    ResourceType,
};
pub use spec::{load_spec, load_spec_file, ServerlessSpec, SpecError};

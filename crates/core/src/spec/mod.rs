// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Serverless application document loading and validation.
//!
//! The document is YAML with four required sections:
//!
//! ```text
//! service: my-shop
//! provider: { runtime, region, profile, stage, iamRoleStatements }
//! resources:
//!   Resources: { <name>: <body> }
//! functions: { <name>: { events: [...] } }
//! ```
//!
//! Loading only checks that the sections exist with the right shape. The
//! raw tree is kept untouched as the `self:` context for interpolation.

mod model;
mod parser;

pub use model::{FunctionDef, Provider, ServerlessSpec, DEFAULT_RUNTIME};
pub use parser::{load_spec, load_spec_file, SpecError};

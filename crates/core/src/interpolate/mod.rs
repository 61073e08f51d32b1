// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder resolution for configuration trees.
//!
//! String values may embed `${...}` placeholders. Each placeholder holds a
//! comma-separated list of candidates, tried left to right:
//!
//! - `self:a.b.c` looks the path up in the document being converted
//! - `opt:a.b` looks the path up in the externally supplied options
//! - anything else is a literal fallback, with surrounding quotes stripped
//!
//! The first candidate with a non-empty result wins. A placeholder with no
//! usable candidate becomes the empty string; resolution never fails.
//!
//! ```text
//! "${self:provider.stage, opt:stage, 'dev'}-orders"  →  "prod-orders"
//! ```

mod resolver;
mod segment;
mod tree;

pub use resolver::{resolve, Resolver, MAX_DEPTH};
pub use segment::{parse_segments, Segment};
pub use tree::{interpolate, interpolate_value};

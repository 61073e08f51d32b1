// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod convert;
pub mod paths;

use clap::Args;
use simplify_core::{load_spec_file, Options, ServerlessSpec};
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments shared by every command that reads a document
#[derive(Args)]
pub struct InputArgs {
    /// Serverless document to read
    #[arg(short, long, default_value = "serverless.yaml")]
    pub input: PathBuf,

    /// Option consulted by `${opt:...}` placeholders (key=value, repeatable)
    #[arg(short = 'O', long = "opt", value_parser = parse_key_val)]
    pub options: Vec<(String, String)>,
}

impl InputArgs {
    pub fn options(&self) -> Options {
        Options::from_pairs(self.options.iter().map(|(k, v)| (k, v.clone())))
    }

    pub fn load(&self) -> Result<ServerlessSpec, CliError> {
        load_spec_file(&self.input).map_err(|e| CliError::invalid_document(&self.input, e))
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{s}`"))?;
    if key.is_empty() {
        return Err(format!("invalid key=value: empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

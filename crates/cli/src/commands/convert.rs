// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `simplify-converter convert` - Resolve a document and write its artifacts

use anyhow::Result;
use clap::Args;
use simplify_core::convert_file;
use std::path::PathBuf;

use super::InputArgs;
use crate::error::CliError;

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory receiving openapi.yaml and resources/
    #[arg(short, long, default_value = "./")]
    pub output: PathBuf,
}

pub fn handle(args: ConvertArgs) -> Result<()> {
    let options = args.input.options();
    let written = convert_file(&args.input.input, &args.output, &options)
        .map_err(|e| CliError::from_convert(&args.input.input, &args.output, e))?;

    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

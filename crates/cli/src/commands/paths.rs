// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `simplify-converter paths` - Show the projected resource table

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use simplify_core::{convert, ResourceDescriptor};
use std::fmt;

use super::InputArgs;
use crate::output::{print_list, OutputFormat};

#[derive(Args)]
pub struct PathsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// One effective path and the descriptors routed to it
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PathEntry<'a> {
    resource_path: &'a str,
    resources: &'a [ResourceDescriptor],
}

impl fmt::Display for PathEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource_path)?;
        for descriptor in self.resources {
            write!(f, "\n  {}", descriptor)?;
        }
        Ok(())
    }
}

pub fn handle(args: PathsArgs) -> Result<()> {
    let spec = args.input.load()?;
    let conversion = convert(&spec, &args.input.options());

    let entries: Vec<PathEntry<'_>> = conversion
        .table
        .iter()
        .map(|(resource_path, resources)| PathEntry {
            resource_path,
            resources,
        })
        .collect();

    let table = &conversion.table;
    match args.format {
        OutputFormat::Text if table.is_empty() => println!("No paths"),
        OutputFormat::Text => {
            print_list(&entries, args.format)?;
            let routes = table
                .iter()
                .flat_map(|(_, resources)| resources)
                .filter(|d| d.is_api())
                .count();
            println!(
                "\n{} paths, {} routes, {} events",
                table.len(),
                routes,
                table.descriptor_count() - routes
            );
        }
        OutputFormat::Json => print_list(&entries, args.format)?,
    }
    Ok(())
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact rendering and writing.
//!
//! Rendering happens entirely in memory. Writing stages every file next to
//! its target before moving any into place, and undoes whatever it placed if
//! a later step fails, so a failed run leaves no artifacts behind.
//!
//! ```text
//! <out>/openapi.yaml
//! <out>/resources/<ProjectName>.yaml
//! <out>/resources/package.json
//! <out>/resources/resource-input.json
//! ```

mod manifest;
mod openapi;
mod resources;

pub use manifest::{package_json, resource_input_json};
pub use openapi::{render_openapi, GENERATOR_VERSION};
pub use resources::ResourceSet;

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while rendering or writing artifacts.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Rendered output documents, not yet on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// `<ProjectName>.yaml`
    pub resources_file: String,
    pub resources_yaml: String,
    pub package_json: String,
    pub resource_input_json: String,
    pub openapi_yaml: String,
}

impl Artifacts {
    /// Write every artifact under `out_dir`, returning the written paths.
    ///
    /// On error nothing this call created is left on disk.
    pub fn write_to(&self, out_dir: &Path) -> Result<Vec<PathBuf>, EmitError> {
        let resources_dir = out_dir.join("resources");

        let mut rollback = Rollback::default();
        for dir in [out_dir, resources_dir.as_path()] {
            if !dir.exists() {
                rollback.dirs.push(dir.to_path_buf());
            }
        }

        let result = std::fs::create_dir_all(&resources_dir)
            .map_err(|e| io_error(&resources_dir, e))
            .and_then(|()| self.place(out_dir, &resources_dir, &mut rollback));

        match result {
            Ok(written) => {
                for path in &written {
                    info!(path = %path.display(), "generated");
                }
                Ok(written)
            }
            Err(e) => {
                rollback.undo();
                Err(e)
            }
        }
    }

    fn targets(&self, out_dir: &Path, resources_dir: &Path) -> [(PathBuf, &str); 4] {
        [
            (
                resources_dir.join(&self.resources_file),
                self.resources_yaml.as_str(),
            ),
            (resources_dir.join("package.json"), self.package_json.as_str()),
            (
                resources_dir.join("resource-input.json"),
                self.resource_input_json.as_str(),
            ),
            (out_dir.join("openapi.yaml"), self.openapi_yaml.as_str()),
        ]
    }

    /// Stage every file, then move each into place.
    fn place(
        &self,
        out_dir: &Path,
        resources_dir: &Path,
        rollback: &mut Rollback,
    ) -> Result<Vec<PathBuf>, EmitError> {
        let mut staged = Vec::new();
        for (target, content) in self.targets(out_dir, resources_dir) {
            let staging = staging_path(&target);
            rollback.files.push(staging.clone());
            std::fs::write(&staging, content).map_err(|e| io_error(&staging, e))?;
            staged.push((staging, target));
        }

        let mut written = Vec::with_capacity(staged.len());
        for (staging, target) in staged {
            std::fs::rename(&staging, &target).map_err(|e| io_error(&target, e))?;
            rollback.files.push(target.clone());
            written.push(target);
        }

        Ok(written)
    }
}

/// Paths to remove when a write fails part way
#[derive(Debug, Default)]
struct Rollback {
    files: Vec<PathBuf>,
    /// Directories this run created, outermost first
    dirs: Vec<PathBuf>,
}

impl Rollback {
    fn undo(self) {
        for file in self.files.iter().rev() {
            match std::fs::remove_file(file) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(path = %file.display(), error = %e, "failed to remove partial output")
                }
            }
        }
        for dir in self.dirs.iter().rev() {
            match std::fs::remove_dir(dir) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(path = %dir.display(), error = %e, "failed to remove directory")
                }
            }
        }
    }
}

/// Hidden sibling of `target`: `dir/name` → `dir/.name.tmp`
fn staging_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(target.file_name().unwrap_or_default());
    name.push(".tmp");
    target.with_file_name(name)
}

fn io_error(path: &Path, source: std::io::Error) -> EmitError {
    EmitError::Io {
        path: path.display().to_string(),
        source,
    }
}

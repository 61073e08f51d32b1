// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path-keyed descriptor table

use super::descriptor::ResourceDescriptor;
use super::group::Group;
use serde::Serialize;
use std::collections::HashMap;

/// Descriptors grouped by path, in first-seen path order.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    entries: Vec<(String, Vec<ResourceDescriptor>)>,
    index: HashMap<String, usize>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor to its path's group, creating the group if needed
    pub fn push(&mut self, descriptor: ResourceDescriptor) {
        match self.index.get(&descriptor.resource_path) {
            Some(&slot) => self.entries[slot].1.push(descriptor),
            None => {
                self.index
                    .insert(descriptor.resource_path.clone(), self.entries.len());
                self.entries
                    .push((descriptor.resource_path.clone(), vec![descriptor]));
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&[ResourceDescriptor]> {
        self.index
            .get(path)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Paths in first-seen order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ResourceDescriptor])> {
        self.entries
            .iter()
            .map(|(path, descriptors)| (path.as_str(), descriptors.as_slice()))
    }

    /// Number of distinct paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total descriptors across all paths
    pub fn descriptor_count(&self) -> usize {
        self.entries.iter().map(|(_, d)| d.len()).sum()
    }

    /// Convert into the ordered `{path, group}` records templates consume
    pub fn into_groups(self) -> Vec<PathGroup> {
        self.entries
            .into_iter()
            .map(|(resource_path, descriptors)| PathGroup {
                resource_path,
                resource_data: Group::new(descriptors),
            })
            .collect()
    }
}

/// All descriptors sharing one path
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathGroup {
    pub resource_path: String,
    pub resource_data: Group<ResourceDescriptor>,
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;

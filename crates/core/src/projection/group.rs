// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequences annotated with positional flags for logic-less templates

use serde::Serialize;

/// An item paired with its position in the enclosing [`Group`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Positioned<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(rename = "isFirst")]
    pub is_first: bool,
    #[serde(rename = "isLast")]
    pub is_last: bool,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// An ordered sequence where every element knows whether it is first or last.
///
/// Templates iterate `items` and use the flags to place separators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<T> {
    pub items: Vec<Positioned<T>>,
    #[serde(rename = "isEmpty")]
    pub is_empty: bool,
}

impl<T> Group<T> {
    pub fn new(items: Vec<T>) -> Self {
        let len = items.len();
        let items = items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| Positioned {
                item,
                is_first: idx == 0,
                is_last: idx + 1 == len,
                has_more: idx + 1 < len,
            })
            .collect();

        Self {
            items,
            is_empty: len == 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|p| &p.item)
    }
}

impl<T> From<Vec<T>> for Group<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ordered tool registry.
//!
//! Holds the tools shown by a toolbar, in display order, and answers
//! identifier-based lookups.

use super::tool::Tool;
use anyhow::{bail, Result};
use std::collections::HashSet;

/// An ordered collection of tools with unique identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    /// Create a registry, rejecting duplicate identifiers.
    pub fn new(tools: Vec<Tool>) -> Result<Self> {
        let mut registry = Self::default();
        registry.replace(tools)?;
        Ok(registry)
    }

    /// Replace every tool in the registry.
    ///
    /// On a duplicate identifier the registry is left untouched.
    pub fn replace(&mut self, tools: Vec<Tool>) -> Result<()> {
        let mut seen = HashSet::with_capacity(tools.len());
        for tool in &tools {
            if !seen.insert(tool.id.as_str()) {
                bail!("Duplicate tool identifier: {}", tool.id);
            }
        }
        self.tools = tools;
        Ok(())
    }

    /// Find a tool by identifier. The first match wins.
    pub fn find(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    /// Position of a tool in display order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tools.iter().position(|tool| tool.id == id)
    }

    /// Tool at the given display position.
    pub fn get(&self, index: usize) -> Option<&Tool> {
        self.tools.get(index)
    }

    /// Tools whose identifier is in `ids`, in registry order.
    pub fn filter_by_ids<'a>(&'a self, ids: &'a HashSet<String>) -> impl Iterator<Item = &'a Tool> {
        self.tools.iter().filter(move |tool| ids.contains(&tool.id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

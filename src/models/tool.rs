// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tool data structures.
//!
//! This module defines a single toolbar tool, the asset it is drawn with,
//! and the status label reported to delegates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// What a tool button displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayAsset {
    /// A text or emoji glyph drawn with the UI font.
    Glyph(String),
    /// An image file, decoded and tinted with the tool color.
    Image(PathBuf),
    #[default]
    None,
}

/// A single selectable tool.
///
/// Two tools are equal when their identifiers match; the asset is not
/// part of a tool's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    #[serde(default)]
    pub asset: DisplayAsset,
}

impl Tool {
    /// Create a tool with the given identifier and asset.
    pub fn new(id: impl Into<String>, asset: DisplayAsset) -> Self {
        Self {
            id: id.into(),
            asset,
        }
    }

    /// Create a tool drawn with a text glyph.
    pub fn glyph(id: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self::new(id, DisplayAsset::Glyph(glyph.into()))
    }
}

impl PartialEq for Tool {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tool {}

/// Selection status of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Active,
    Inactive,
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolStatus::Active => f.write_str("active"),
            ToolStatus::Inactive => f.write_str("inactive"),
        }
    }
}

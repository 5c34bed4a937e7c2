// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar configuration serialization and deserialization.
//!
//! This module handles exporting and importing toolbar configurations in
//! YAML and JSON formats.

use crate::models::config::ToolbarConfig;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Export a configuration to YAML format.
pub fn export_yaml(config: &ToolbarConfig, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export a configuration to JSON format.
pub fn export_json(config: &ToolbarConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Import a configuration from YAML format.
pub fn import_yaml(path: &Path) -> Result<ToolbarConfig> {
    let yaml = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config = serde_yaml::from_str(&yaml)?;
    Ok(config)
}

/// Import a configuration from JSON format.
pub fn import_json(path: &Path) -> Result<ToolbarConfig> {
    let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config = serde_json::from_str(&json)?;
    Ok(config)
}

/// Import a configuration, picking the format from the file extension.
pub fn import_config(path: &Path) -> Result<ToolbarConfig> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => bail!("Unsupported file extension: {:?}", extension),
    }
}

/// Export a configuration, picking the format from the file extension.
pub fn export_config(config: &ToolbarConfig, path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => export_yaml(config, path),
        Some("json") => export_json(config, path),
        _ => bail!("Unsupported file extension: {:?}", extension),
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar configuration.
//!
//! This module defines the layout, selection and styling options of a
//! toolbar, along with the serializable bundle used for config files.

use super::tool::Tool;
use serde::{Deserialize, Serialize};

/// How many tools may be active at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Only one tool can be active; activating another replaces it.
    #[default]
    Single,
    /// Only one tool can be active; it must be deactivated before another
    /// can be activated.
    SingleLock,
    /// Any number of tools can be active.
    Multiple,
}

/// Direction the buttons are laid out in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// How buttons are sized within the toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Square buttons that only take the room they need.
    #[default]
    Block,
    /// Buttons stretch to fill the toolbar.
    Fill,
}

/// Visual feedback while a button is pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionAnimation {
    None,
    #[default]
    Bounce,
}

/// An RGBA color (unmultiplied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba([r, g, b, 255])
    }
}

impl From<Rgba> for egui::Color32 {
    fn from(color: Rgba) -> Self {
        let [r, g, b, a] = color.0;
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

/// Color pairs for inactive and active tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarStyle {
    /// Tint of the tool asset when inactive.
    pub tool_color: Rgba,
    /// Tint of the tool asset when active.
    pub active_tool_color: Rgba,
    /// Button background when inactive.
    pub tool_background_color: Rgba,
    /// Button background when active.
    pub active_tool_background_color: Rgba,
}

impl Default for ToolbarStyle {
    fn default() -> Self {
        Self {
            tool_color: Rgba::rgb(220, 220, 220),
            active_tool_color: Rgba::rgb(0, 122, 255),
            tool_background_color: Rgba::TRANSPARENT,
            active_tool_background_color: Rgba::TRANSPARENT,
        }
    }
}

impl ToolbarStyle {
    /// Foreground and background colors for a tool in the given state.
    pub fn colors(&self, is_active: bool) -> (Rgba, Rgba) {
        if is_active {
            (self.active_tool_color, self.active_tool_background_color)
        } else {
            (self.tool_color, self.tool_background_color)
        }
    }
}

/// Complete toolbar configuration for serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    pub tools: Vec<Tool>,
    pub axis: Axis,
    pub layout_mode: LayoutMode,
    pub selection_mode: SelectionMode,
    pub selection_animation: SelectionAnimation,
    pub style: ToolbarStyle,
}

impl ToolbarConfig {
    /// Create a configuration with default options for the given tools.
    pub fn new(tools: Vec<Tool>) -> Self {
        Self {
            tools,
            ..Default::default()
        }
    }
}

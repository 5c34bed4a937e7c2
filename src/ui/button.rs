// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Rendered tool buttons.
//!
//! A [`ToolButton`] is the handle the toolbar builds for each tool. It is
//! handed to the delegate right after construction, so hosts can adjust
//! tooltips, sizes or colors before the button is drawn.

use crate::models::config::{Rgba, SelectionAnimation, ToolbarStyle};
use crate::util::geometry;

/// Layout and styling of a single tool button.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolButton {
    /// Identifier of the tool this button toggles
    pub tool_id: String,
    /// Button size in points
    pub size: egui::Vec2,
    /// Padding between the button edge and its asset
    pub inset: f32,
    pub tooltip: Option<String>,
    pub animation: SelectionAnimation,
    /// Per-button colors that take precedence over the toolbar style
    pub style_override: Option<ToolbarStyle>,
}

impl ToolButton {
    pub fn new(tool_id: impl Into<String>, size: egui::Vec2, inset: f32) -> Self {
        Self {
            tool_id: tool_id.into(),
            size,
            inset,
            tooltip: None,
            animation: SelectionAnimation::default(),
            style_override: None,
        }
    }

    /// Foreground and background colors for the current state.
    pub fn colors(&self, style: &ToolbarStyle, is_active: bool) -> (Rgba, Rgba) {
        self.style_override.as_ref().unwrap_or(style).colors(is_active)
    }

    /// Rectangle to paint in, given the allocated rect and press progress.
    pub fn paint_rect(&self, allocated: egui::Rect, press: f32) -> egui::Rect {
        match self.animation {
            SelectionAnimation::None => allocated,
            SelectionAnimation::Bounce => {
                let scale = geometry::bounce_scale(press);
                egui::Rect::from_center_size(allocated.center(), allocated.size() * scale)
            }
        }
    }
}

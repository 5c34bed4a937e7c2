// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the sizing rules for toolbar buttons: square
//! blocks or evenly divided fills along either axis.

use crate::models::config::{Axis, LayoutMode};

/// Fraction of the cross-axis extent left as padding around an asset.
pub const ICON_INSET_RATIO: f32 = 0.25;

/// Scale applied to a fully pressed button.
pub const PRESSED_SCALE: f32 = 0.9;

/// Length of the bounce animation in seconds.
pub const BOUNCE_DURATION: f32 = 0.1;

/// Extent of the toolbar along its axis.
pub fn main_extent(axis: Axis, bounds: egui::Vec2) -> f32 {
    match axis {
        Axis::Horizontal => bounds.x,
        Axis::Vertical => bounds.y,
    }
}

/// Extent of the toolbar across its axis.
pub fn cross_extent(axis: Axis, bounds: egui::Vec2) -> f32 {
    match axis {
        Axis::Horizontal => bounds.y,
        Axis::Vertical => bounds.x,
    }
}

/// Size of each button for `count` tools in a toolbar of size `bounds`.
pub fn button_extent(layout: LayoutMode, axis: Axis, bounds: egui::Vec2, count: usize) -> egui::Vec2 {
    let cross = cross_extent(axis, bounds);
    let main = match layout {
        LayoutMode::Block => cross,
        LayoutMode::Fill if count == 0 => 0.0,
        LayoutMode::Fill => main_extent(axis, bounds) / count as f32,
    };

    match axis {
        Axis::Horizontal => egui::vec2(main, cross),
        Axis::Vertical => egui::vec2(cross, main),
    }
}

/// Padding between a button's edge and its asset.
pub fn icon_inset(axis: Axis, bounds: egui::Vec2) -> f32 {
    cross_extent(axis, bounds) * ICON_INSET_RATIO
}

/// Button scale for a press progress between 0.0 (released) and 1.0.
pub fn bounce_scale(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    1.0 + (PRESSED_SCALE - 1.0) * t
}

/// Largest rect with the aspect ratio of `content_size` that fits in `bounds`.
pub fn fit_aspect(bounds: egui::Rect, content_size: egui::Vec2) -> egui::Rect {
    if content_size.x <= 0.0 || content_size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / content_size.x).min(bounds.height() / content_size.y);
    egui::Rect::from_center_size(bounds.center(), content_size * scale)
}

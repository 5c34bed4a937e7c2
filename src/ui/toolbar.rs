// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar widget.
//!
//! This module draws a row or column of tool buttons, styles them by
//! status, and forwards presses to the [`SelectionController`].

use crate::io::media::IconCache;
use crate::models::{
    config::{Axis, LayoutMode, SelectionAnimation, SelectionMode, ToolbarConfig, ToolbarStyle},
    tool::{DisplayAsset, Tool},
};
use crate::selection::{SelectionController, ToolbarDelegate};
use crate::ui::button::ToolButton;
use crate::util::geometry;
use anyhow::Result;

/// Thickness of a toolbar across its axis, in points.
pub const DEFAULT_THICKNESS: f32 = 44.0;

/// Result of showing the toolbar for one frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToolbarResponse {
    /// Tool whose button was clicked this frame
    pub pressed: Option<String>,
    /// Whether the press changed the tool's status
    pub accepted: bool,
}

/// A toolbar of toggleable tool buttons.
pub struct ToolbarView {
    id: egui::Id,
    controller: SelectionController,
    axis: Axis,
    layout_mode: LayoutMode,
    selection_animation: SelectionAnimation,
    style: ToolbarStyle,
    thickness: f32,

    buttons: Vec<ToolButton>,
    /// Toolbar size the buttons were last built for
    built_for: Option<egui::Vec2>,
    needs_rebuild: bool,
    seen_revision: u64,
    icons: IconCache,
}

impl ToolbarView {
    /// Create a toolbar from a configuration.
    ///
    /// Fails if the configuration lists the same tool identifier twice.
    pub fn new(id_source: impl std::hash::Hash, config: ToolbarConfig) -> Result<Self> {
        let mut controller = SelectionController::default();
        controller.set_selection_mode(config.selection_mode);
        controller.set_tools(config.tools)?;

        Ok(Self {
            id: egui::Id::new(id_source),
            seen_revision: controller.revision(),
            controller,
            axis: config.axis,
            layout_mode: config.layout_mode,
            selection_animation: config.selection_animation,
            style: config.style,
            thickness: DEFAULT_THICKNESS,
            buttons: Vec::new(),
            built_for: None,
            needs_rebuild: true,
            icons: IconCache::default(),
        })
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ToolbarConfig {
        ToolbarConfig {
            tools: self.controller.registry().tools().to_vec(),
            axis: self.axis,
            layout_mode: self.layout_mode,
            selection_mode: self.controller.selection_mode(),
            selection_animation: self.selection_animation,
            style: self.style,
        }
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SelectionController {
        &mut self.controller
    }

    pub fn buttons(&self) -> &[ToolButton] {
        &self.buttons
    }

    /// Tools that are currently active, in display order.
    pub fn active_tools(&self) -> Vec<&Tool> {
        self.controller.active_tools()
    }

    /// Activate a tool, obeying the selection mode.
    pub fn activate(&mut self, id: &str) -> bool {
        self.controller.activate(id)
    }

    /// Deactivate a tool.
    pub fn deactivate(&mut self, id: &str) -> bool {
        self.controller.deactivate(id)
    }

    /// Replace the tools. Clears the active tools.
    pub fn set_tools(&mut self, tools: Vec<Tool>) -> Result<()> {
        self.controller.set_tools(tools)?;
        self.icons.clear();
        self.needs_rebuild = true;
        Ok(())
    }

    /// Replace the delegate. Buttons are rebuilt so it sees every setup.
    pub fn set_delegate(&mut self, delegate: Box<dyn ToolbarDelegate>) {
        self.controller.set_delegate(delegate);
        self.needs_rebuild = true;
    }

    /// Change the selection mode. Clears the active tools.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.controller.set_selection_mode(mode);
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn set_axis(&mut self, axis: Axis) {
        if self.axis != axis {
            self.axis = axis;
            self.needs_rebuild = true;
        }
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn set_layout_mode(&mut self, layout_mode: LayoutMode) {
        if self.layout_mode != layout_mode {
            self.layout_mode = layout_mode;
            self.needs_rebuild = true;
        }
    }

    pub fn selection_animation(&self) -> SelectionAnimation {
        self.selection_animation
    }

    pub fn set_selection_animation(&mut self, animation: SelectionAnimation) {
        if self.selection_animation != animation {
            self.selection_animation = animation;
            self.needs_rebuild = true;
        }
    }

    pub fn style(&self) -> &ToolbarStyle {
        &self.style
    }

    /// Change the colors. Takes effect on the next frame without a rebuild.
    pub fn set_style(&mut self, style: ToolbarStyle) {
        self.style = style;
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        self.thickness = thickness.max(0.0);
    }

    /// Toolbar size for the given available space.
    pub fn bounds(&self, available: egui::Vec2) -> egui::Vec2 {
        match self.axis {
            Axis::Horizontal => egui::vec2(available.x, self.thickness),
            Axis::Vertical => egui::vec2(self.thickness, available.y),
        }
    }

    /// Build a button for every tool and run the delegate's setup hook.
    pub fn rebuild(&mut self, bounds: egui::Vec2) {
        let registry = self.controller.registry();
        let size = geometry::button_extent(self.layout_mode, self.axis, bounds, registry.len());
        let inset = geometry::icon_inset(self.axis, bounds);

        self.buttons = registry
            .iter()
            .map(|tool| {
                let mut button = ToolButton::new(tool.id.clone(), size, inset);
                button.animation = self.selection_animation;
                button
            })
            .collect();

        for button in &mut self.buttons {
            self.controller.notify_setup(button);
        }

        self.built_for = Some(bounds);
        self.needs_rebuild = false;
        log::debug!("Built {} tool buttons at {:?}", self.buttons.len(), size);
    }

    /// Draw the toolbar and handle presses.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ToolbarResponse {
        let bounds = self.bounds(ui.available_size());
        if self.needs_rebuild || self.built_for != Some(bounds) {
            self.rebuild(bounds);
        }

        let layout = match self.axis {
            Axis::Horizontal => egui::Layout::left_to_right(egui::Align::Min),
            Axis::Vertical => egui::Layout::top_down(egui::Align::Min),
        };

        let mut pressed = None;
        ui.allocate_ui_with_layout(bounds, layout, |ui| {
            ui.spacing_mut().item_spacing = egui::Vec2::ZERO;

            for button in &self.buttons {
                let Some(tool) = self.controller.registry().find(&button.tool_id) else {
                    continue;
                };
                let is_active = self.controller.is_active(&tool.id);
                if paint_button(ui, self.id, button, tool, is_active, &self.style, &mut self.icons) {
                    pressed = Some(button.tool_id.clone());
                }
            }
        });

        let mut response = ToolbarResponse::default();
        if let Some(tool_id) = pressed {
            response.accepted = self.controller.toggle_press(&tool_id);
            response.pressed = Some(tool_id);
        }

        if self.controller.revision() != self.seen_revision {
            self.seen_revision = self.controller.revision();
            ui.ctx().request_repaint();
        }

        response
    }
}

/// Draw one button. Returns true if it was clicked.
fn paint_button(
    ui: &mut egui::Ui,
    toolbar_id: egui::Id,
    button: &ToolButton,
    tool: &Tool,
    is_active: bool,
    style: &ToolbarStyle,
    icons: &mut IconCache,
) -> bool {
    let (rect, response) = ui.allocate_exact_size(button.size, egui::Sense::click());

    let held = response.is_pointer_button_down_on();
    let press = ui.ctx().animate_bool_with_time(
        toolbar_id.with(&button.tool_id),
        held,
        geometry::BOUNCE_DURATION,
    );
    let rect = button.paint_rect(rect, press);

    if ui.is_rect_visible(rect) {
        let (foreground, background) = button.colors(style, is_active);
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, background);

        let content = rect.shrink(button.inset * geometry::bounce_scale(press));
        match &tool.asset {
            DisplayAsset::Glyph(glyph) => {
                painter.text(
                    content.center(),
                    egui::Align2::CENTER_CENTER,
                    glyph,
                    egui::FontId::proportional(content.width().min(content.height()).max(1.0)),
                    foreground.into(),
                );
            }
            DisplayAsset::Image(path) => {
                if let Some(texture) = icons.texture(ui.ctx(), path) {
                    painter.image(
                        texture.id(),
                        geometry::fit_aspect(content, texture.size_vec2()),
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        foreground.into(),
                    );
                }
            }
            DisplayAsset::None => {}
        }
    }

    let response = match &button.tooltip {
        Some(text) => response.on_hover_text(text.as_str()),
        None => response,
    };
    response.clicked()
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sample application state and egui App implementation.
//!
//! This module hosts a toolbar inside an eframe window, with controls for
//! every layout and selection option and a log of status changes reported
//! by the toolbar's delegate.

use crate::io::serialization;
use crate::models::{
    config::{Axis, LayoutMode, SelectionAnimation, SelectionMode, ToolbarConfig},
    tool::{Tool, ToolStatus},
};
use crate::selection::ToolbarDelegate;
use crate::ui::toolbar::ToolbarView;
use anyhow::Result;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Number of status messages kept on screen.
const STATUS_LOG_LEN: usize = 12;

/// Shared, bounded list of status messages.
type StatusLog = Rc<RefCell<VecDeque<String>>>;

/// Delegate that records every status change.
struct LoggingDelegate {
    log: StatusLog,
}

impl ToolbarDelegate for LoggingDelegate {
    fn did_change_status(&mut self, tool: &Tool, status: ToolStatus) {
        let message = format!("Changed status of {} to {}", tool.id, status);
        log::info!("{}", message);

        let mut entries = self.log.borrow_mut();
        entries.push_front(message);
        entries.truncate(STATUS_LOG_LEN);
    }
}

/// The tools shown when no configuration file is given.
pub fn default_tools() -> Vec<Tool> {
    vec![
        Tool::glyph("doc", "📄"),
        Tool::glyph("folder", "📁"),
        Tool::glyph("highlighter", "🖍"),
        Tool::glyph("trash", "🗑"),
    ]
}

/// Main application state.
pub struct SampleApp {
    /// The toolbar being explored
    toolbar: ToolbarView,

    /// Status changes reported by the toolbar
    status_log: StatusLog,
}

impl SampleApp {
    /// Create the sample with the given configuration.
    pub fn new(config: ToolbarConfig) -> Result<Self> {
        let mut toolbar = ToolbarView::new("sample_toolbar", config)?;
        let status_log = StatusLog::default();
        toolbar.set_delegate(Box::new(LoggingDelegate {
            log: status_log.clone(),
        }));

        Ok(Self { toolbar, status_log })
    }

    /// Load a configuration file and apply it to the toolbar.
    fn load_config(&mut self, path: std::path::PathBuf) {
        let config = match serialization::import_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load configuration: {:#}", e);
                return;
            }
        };

        if let Err(e) = self.toolbar.set_tools(config.tools) {
            log::error!("Failed to load configuration: {:#}", e);
            return;
        }
        self.toolbar.set_axis(config.axis);
        self.toolbar.set_layout_mode(config.layout_mode);
        self.toolbar.set_selection_mode(config.selection_mode);
        self.toolbar.set_selection_animation(config.selection_animation);
        self.toolbar.set_style(config.style);
        log::info!("Loaded configuration from {}", path.display());
    }

    /// Save the toolbar's configuration to a file.
    fn save_config(&self, path: std::path::PathBuf) {
        match serialization::export_config(&self.toolbar.config(), &path) {
            Ok(_) => log::info!("Saved configuration to {}", path.display()),
            Err(e) => log::error!("Failed to save configuration: {:#}", e),
        }
    }

    /// Show the option controls.
    fn show_controls(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("toolbar_options")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Axis");
                let mut axis = self.toolbar.axis();
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut axis, Axis::Horizontal, "Horizontal");
                    ui.selectable_value(&mut axis, Axis::Vertical, "Vertical");
                });
                self.toolbar.set_axis(axis);
                ui.end_row();

                ui.label("Layout");
                let mut layout_mode = self.toolbar.layout_mode();
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut layout_mode, LayoutMode::Block, "Block");
                    ui.selectable_value(&mut layout_mode, LayoutMode::Fill, "Fill");
                });
                self.toolbar.set_layout_mode(layout_mode);
                ui.end_row();

                ui.label("Selection");
                let current = self.toolbar.controller().selection_mode();
                let mut selection_mode = current;
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut selection_mode, SelectionMode::Single, "Single");
                    ui.selectable_value(&mut selection_mode, SelectionMode::SingleLock, "Single Lock");
                    ui.selectable_value(&mut selection_mode, SelectionMode::Multiple, "Multiple");
                });
                // Only on change: setting the mode clears the active tools
                if selection_mode != current {
                    self.toolbar.set_selection_mode(selection_mode);
                }
                ui.end_row();

                ui.label("Animation");
                let mut animation = self.toolbar.selection_animation();
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut animation, SelectionAnimation::Bounce, "Bounce");
                    ui.selectable_value(&mut animation, SelectionAnimation::None, "None");
                });
                self.toolbar.set_selection_animation(animation);
                ui.end_row();
            });
    }
}

impl eframe::App for SampleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load Configuration...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Configuration", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_config(path);
                        }
                        ui.close_menu();
                    }
                    ui.menu_button("Save Configuration", |ui| {
                        if ui.button("Save as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("toolbar.yaml")
                                .save_file()
                            {
                                self.save_config(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Save as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("toolbar.json")
                                .save_file()
                            {
                                self.save_config(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Options panel (right side)
        egui::SidePanel::right("options")
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.heading("Options");
                ui.separator();
                self.show_controls(ui);

                ui.separator();
                ui.heading("Status changes");
                for message in self.status_log.borrow().iter() {
                    ui.label(egui::RichText::new(message).monospace());
                }
            });

        // Canvas (center) hosting the toolbar
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = self.toolbar.show(ui);
            if let (Some(tool_id), false) = (&response.pressed, response.accepted) {
                log::debug!("Press on {} was rejected", tool_id);
            }

            ui.separator();
            let active: Vec<&str> = self
                .toolbar
                .active_tools()
                .iter()
                .map(|tool| tool.id.as_str())
                .collect();
            ui.horizontal(|ui| {
                ui.label(format!("Selection: {:?}", self.toolbar.controller().selection_mode()));
                ui.separator();
                if active.is_empty() {
                    ui.label("No active tools");
                } else {
                    ui.label(format!("Active: {}", active.join(", ")));
                }
            });
        });
    }
}

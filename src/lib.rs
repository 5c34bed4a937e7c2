// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Togglebar - a toolbar of toggleable tool buttons for egui.
//!
//! Tools are laid out in a row or column and switched on and off by the
//! user. A [`SelectionController`] enforces how many tools may be active at
//! once, and a [`ToolbarDelegate`] can veto or observe every change.

pub mod app;
pub mod io;
pub mod models;
pub mod selection;
pub mod ui;
pub mod util;

pub use models::config::{Axis, LayoutMode, SelectionAnimation, SelectionMode, ToolbarConfig, ToolbarStyle};
pub use models::registry::ToolRegistry;
pub use models::tool::{DisplayAsset, Tool, ToolStatus};
pub use selection::{NoopDelegate, SelectionController, ToolbarDelegate};
pub use ui::button::ToolButton;
pub use ui::toolbar::{ToolbarResponse, ToolbarView};

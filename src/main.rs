// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Togglebar sample - explore the toolbar's configuration options.
//!
//! Usage: `togglebar-sample [CONFIG]`, where CONFIG is an optional YAML or
//! JSON toolbar configuration file.

use anyhow::Result;
use togglebar::app::{default_tools, SampleApp};
use togglebar::io::serialization;
use togglebar::ToolbarConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            let config = serialization::import_config(&path)?;
            log::info!("Loaded {} tools from {}", config.tools.len(), path.display());
            config
        }
        None => ToolbarConfig::new(default_tools()),
    };
    let app = SampleApp::new(config)?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 540.0])
            .with_min_inner_size([640.0, 360.0])
            .with_title("Togglebar Sample"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Togglebar",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

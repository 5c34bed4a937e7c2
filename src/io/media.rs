// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tool icon loading.
//!
//! This module decodes image assets and caches them as egui textures so
//! each icon is only read from disk once.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A decoded RGBA image.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode an image file into RGBA pixels.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();

    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

/// Textures for image assets, keyed by path.
///
/// Failed loads are remembered as `None` so a missing file is logged once
/// rather than every frame.
#[derive(Default)]
pub struct IconCache {
    textures: HashMap<PathBuf, Option<egui::TextureHandle>>,
}

impl IconCache {
    /// Texture for the image at `path`, loading it on first use.
    pub fn texture(&mut self, ctx: &egui::Context, path: &Path) -> Option<&egui::TextureHandle> {
        self.textures
            .entry(path.to_path_buf())
            .or_insert_with(|| match load_image(path) {
                Ok(loaded) => {
                    let size = [loaded.width as usize, loaded.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                    Some(ctx.load_texture(
                        path.to_string_lossy(),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    log::error!("Failed to load tool icon: {:#}", e);
                    None
                }
            })
            .as_ref()
    }

    pub fn clear(&mut self) {
        self.textures.clear();
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sketch image loading.
//!
//! This module decodes sketch images into RGBA pixel buffers suitable
//! for upload as egui textures.

use anyhow::{Context, Result};
use std::path::Path;

/// A decoded image ready for texture upload.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load and decode an image file as RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folio - a desktop viewer for developer portfolio case studies.
//!
//! Presents a project list and an animated, scroll-driven case-study
//! viewer that walks through each project's concept, development, and
//! outcome.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::FolioApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Folio - Developer Case Studies"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Folio",
        options,
        Box::new(|_cc| Ok(Box::new(FolioApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

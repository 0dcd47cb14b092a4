// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait: it owns the loaded portfolio, the optional
//! open case-study viewer, the theme, and the background sketch-image
//! loader.

use crate::config::AppConfig;
use crate::io::media::LoadedImage;
use crate::models::{portfolio::Portfolio, viewer::ViewerState};
use crate::ui::theme::Theme;
use crate::ui::viewer::SketchTextures;
use crate::ui::{projects, viewer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

/// Result of background sketch loading for one sketch pair.
struct LoadedSketchPair {
    initial: Option<LoadedImage>,
    final_image: Option<LoadedImage>,
}

/// One open case-study viewer and everything it owns.
///
/// Dropped wholesale when the host closes the viewer, so no viewer
/// state ever outlives the case study it was opened for.
struct OpenViewer {
    project_index: usize,
    state: ViewerState,
    sketches: Vec<SketchTextures>,
}

/// Actions produced by the central panel for the app to apply.
enum ScreenAction {
    None,
    OpenProject(usize),
}

/// Main application state.
pub struct FolioApp {
    /// Loaded portfolio document
    portfolio: Portfolio,

    /// Directory of the loaded portfolio file, for resolving sketch paths
    portfolio_dir: Option<PathBuf>,

    /// Currently open case-study viewer (if any)
    viewer: Option<OpenViewer>,

    /// Current color theme
    theme: Theme,

    /// Receiver for background sketch loading
    sketch_loader: Option<Receiver<Vec<LoadedSketchPair>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl Default for FolioApp {
    fn default() -> Self {
        Self::new()
    }
}

impl FolioApp {
    /// Create a new Folio application instance.
    pub fn new() -> Self {
        let config = AppConfig::load();
        Self {
            portfolio: Portfolio::bundled(),
            portfolio_dir: None,
            viewer: None,
            theme: config.theme,
            sketch_loader: None,
            loading_message: None,
        }
    }

    /// Switch theme and persist the choice.
    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        let config = AppConfig { theme };
        if let Err(e) = config.save() {
            log::warn!("Failed to save config: {}", e);
        }
    }

    /// Load a portfolio document chosen by the user.
    fn open_portfolio_file(&mut self, path: PathBuf) {
        match crate::io::serialization::import_portfolio(&path) {
            Ok(portfolio) => {
                log::info!(
                    "Loaded portfolio with {} projects from {}",
                    portfolio.projects.len(),
                    path.display()
                );
                self.portfolio = portfolio;
                self.portfolio_dir = path.parent().map(Path::to_path_buf);
                self.close_viewer();
            }
            Err(e) => {
                log::error!("Failed to load portfolio {}: {}", path.display(), e);
            }
        }
    }

    /// Open a case study: fresh viewer state plus background sketch loading.
    fn open_project(&mut self, index: usize) {
        let Some(study) = self.portfolio.project(index) else {
            log::error!("No project at index {}", index);
            return;
        };
        log::info!("Opening case study '{}'", study.id);

        let sketch_count = study.sketches.len();
        self.viewer = Some(OpenViewer {
            project_index: index,
            state: ViewerState::new(),
            sketches: (0..sketch_count).map(|_| SketchTextures::default()).collect(),
        });

        if sketch_count == 0 {
            self.sketch_loader = None;
            self.loading_message = None;
            return;
        }

        let base_dir = self.portfolio_dir.clone();
        let sketches = study.sketches.clone();
        let (sender, receiver) = channel();
        self.sketch_loader = Some(receiver);
        self.loading_message = Some("Loading sketches...".to_string());

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let resolve = |reference: &str| -> PathBuf {
                match &base_dir {
                    Some(dir) => dir.join(reference),
                    None => PathBuf::from(reference),
                }
            };
            let load = |reference: &str| -> Option<LoadedImage> {
                if reference.is_empty() {
                    return None;
                }
                match crate::io::media::load_image(&resolve(reference)) {
                    Ok(img) => Some(img),
                    Err(e) => {
                        log::warn!("Skipping sketch image: {}", e);
                        None
                    }
                }
            };

            let pairs = sketches
                .iter()
                .map(|sketch| LoadedSketchPair {
                    initial: load(&sketch.initial),
                    final_image: load(&sketch.final_image),
                })
                .collect();
            let _ = sender.send(pairs);
        });
    }

    /// Close the open viewer, discarding its state. Host-invoked only.
    fn close_viewer(&mut self) {
        self.viewer = None;
        self.sketch_loader = None;
        self.loading_message = None;
    }

    /// Upload a decoded image as an egui texture.
    fn make_texture(ctx: &egui::Context, name: String, img: LoadedImage) -> egui::TextureHandle {
        let size = [img.width as usize, img.height as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
        ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.theme.visuals());

        // Check for completed sketch loading
        if let Some(ref receiver) = self.sketch_loader {
            if let Ok(pairs) = receiver.try_recv() {
                self.sketch_loader = None;
                self.loading_message = None;

                if let Some(ref mut viewer) = self.viewer {
                    viewer.sketches = pairs
                        .into_iter()
                        .enumerate()
                        .map(|(i, pair)| SketchTextures {
                            initial: pair.initial.map(|img| {
                                Self::make_texture(ctx, format!("sketch_{}_initial", i), img)
                            }),
                            final_image: pair.final_image.map(|img| {
                                Self::make_texture(ctx, format!("sketch_{}_final", i), img)
                            }),
                        })
                        .collect();
                    log::info!("Sketch textures ready");
                }
            }
        }

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Portfolio...").clicked() {
                        // Open native file picker
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Portfolio", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.open_portfolio_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Light Theme").clicked() {
                        self.set_theme(Theme::Light);
                        ui.close_menu();
                    }
                    if ui.button("Dark Theme").clicked() {
                        self.set_theme(Theme::Dark);
                        ui.close_menu();
                    }
                });
            });
        });

        // Chrome row: back navigation and theme toggle
        egui::TopBottomPanel::top("chrome").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.viewer.is_some() {
                    if ui.button("← Projects").clicked() {
                        self.close_viewer();
                    }
                } else {
                    ui.label(egui::RichText::new("Folio").strong());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let toggle = ui
                        .button(self.theme.icon())
                        .on_hover_text("Toggle light/dark theme");
                    if toggle.clicked() {
                        self.set_theme(self.theme.toggled());
                    }
                });
            });
        });

        // Central panel: project list or open viewer
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(egui::RichText::new(message).size(16.0).weak());
                        });
                    });
                    return ScreenAction::None;
                }

                match self.viewer {
                    Some(ref mut open) => {
                        match self.portfolio.project(open.project_index) {
                            Some(study) => {
                                viewer::show(ui, study, &mut open.state, &open.sketches, self.theme);
                            }
                            None => {
                                // Portfolio changed under the viewer.
                                ui.label("This case study is no longer available.");
                            }
                        }
                        ScreenAction::None
                    }
                    None => match projects::show(ui, &self.portfolio, self.theme) {
                        projects::ProjectsAction::OpenProject(index) => {
                            ScreenAction::OpenProject(index)
                        }
                        projects::ProjectsAction::None => ScreenAction::None,
                    },
                }
            })
            .inner;

        match action {
            ScreenAction::OpenProject(index) => self.open_project(index),
            ScreenAction::None => {}
        }
    }
}

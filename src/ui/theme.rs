// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Light/dark theme.
//!
//! The theme is a read-only flag as far as the viewer is concerned:
//! it only changes colors, never behavior.

use serde::{Deserialize, Serialize};

/// Color theme of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the theme toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "🌙",
        }
    }

    /// egui visuals for this theme.
    pub fn visuals(self) -> egui::Visuals {
        let mut visuals = match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        };
        visuals.hyperlink_color = self.accent();
        visuals.selection.bg_fill = self.accent().gamma_multiply(0.4);
        visuals
    }

    /// Indigo accent used for titles, metrics, and emphasis.
    pub fn accent(self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_rgb(79, 70, 229),
            Theme::Dark => egui::Color32::from_rgb(129, 140, 248),
        }
    }

    /// Color for problem statements and warnings.
    pub fn problem_color(self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_rgb(220, 38, 38),
            Theme::Dark => egui::Color32::from_rgb(248, 113, 113),
        }
    }

    /// Color for solutions and improvements.
    pub fn solution_color(self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_rgb(22, 163, 74),
            Theme::Dark => egui::Color32::from_rgb(74, 222, 128),
        }
    }

    /// Background tint for annotated code lines.
    pub fn note_highlight(self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_rgba_unmultiplied(250, 204, 21, 40),
            Theme::Dark => egui::Color32::from_rgba_unmultiplied(250, 204, 21, 25),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&Theme::Light).expect("serialize");
        assert_eq!(json, "\"light\"");
    }
}

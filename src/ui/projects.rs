// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project list screen.
//!
//! Shows the developer's name and tagline followed by one card per
//! case study.

use crate::models::portfolio::Portfolio;
use crate::ui::theme::Theme;
use crate::ui::text_or_placeholder;

/// Result of project list interaction.
pub enum ProjectsAction {
    None,
    OpenProject(usize),
}

/// Display the list screen; returns the project the user opened, if any.
pub fn show(ui: &mut egui::Ui, portfolio: &Portfolio, theme: Theme) -> ProjectsAction {
    let mut action = ProjectsAction::None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(32.0);
                ui.heading(
                    egui::RichText::new(text_or_placeholder(&portfolio.name))
                        .size(36.0)
                        .color(theme.accent()),
                );
                ui.label(
                    egui::RichText::new(text_or_placeholder(&portfolio.tagline))
                        .size(16.0)
                        .weak(),
                );
                ui.add_space(24.0);
                ui.label(egui::RichText::new("Featured Projects").strong().size(20.0));
                ui.add_space(12.0);
            });

            if portfolio.projects.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("No projects in this portfolio yet.")
                            .italics()
                            .weak(),
                    );
                });
                return;
            }

            for (index, study) in portfolio.projects.iter().enumerate() {
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(text_or_placeholder(&study.title))
                                .strong()
                                .size(18.0),
                        );
                        ui.label(text_or_placeholder(&study.description));
                        ui.add_space(8.0);
                        let open = ui.link(
                            egui::RichText::new("View Case Study →").color(theme.accent()),
                        );
                        if open.clicked() {
                            action = ProjectsAction::OpenProject(index);
                        }
                    });
                ui.add_space(12.0);
            }
        });

    action
}

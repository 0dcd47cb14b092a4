// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Outcome phase sub-view.
//!
//! Renders the impact metric grid and the contribution list.

use crate::models::case_study::CaseStudy;
use crate::ui::theme::Theme;
use crate::ui::text_or_placeholder;

/// Display the outcome phase: impact metrics and contributions.
pub fn show(ui: &mut egui::Ui, study: &CaseStudy, theme: Theme) {
    if study.impact.is_empty() {
        ui.label(
            egui::RichText::new("No impact metrics recorded.")
                .italics()
                .weak(),
        );
    } else {
        egui::Grid::new("impact_grid")
            .num_columns(2)
            .spacing(egui::vec2(24.0, 16.0))
            .show(ui, |ui| {
                for (i, metric) in study.impact.iter().enumerate() {
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::same(16.0))
                        .show(ui, |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(text_or_placeholder(&metric.metric))
                                        .strong(),
                                );
                                ui.label(
                                    egui::RichText::new(text_or_placeholder(&metric.value))
                                        .size(28.0)
                                        .strong()
                                        .color(theme.accent()),
                                );
                                ui.label(
                                    egui::RichText::new(text_or_placeholder(
                                        &metric.improvement,
                                    ))
                                    .small()
                                    .color(theme.solution_color()),
                                );
                            });
                        });
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }

    ui.add_space(16.0);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new("My Contribution").strong().size(18.0));
            ui.add_space(8.0);

            if study.contribution.is_empty() {
                ui.label(egui::RichText::new("—").weak());
            }
            for item in &study.contribution {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("→").color(theme.accent()));
                    ui.label(text_or_placeholder(item));
                });
            }
        });
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Case-study viewer shell.
//!
//! This module owns the scroll tracking and the phase dispatch: the
//! viewer's scroll area is read every frame, mapped to a narrative
//! phase, and exactly one phase sub-view is rendered with a short
//! entry fade. The scroll observation lives entirely inside this
//! component; closing the viewer drops it along with the state.

use crate::models::case_study::CaseStudy;
use crate::models::viewer::{Phase, ViewerState};
use crate::ui::theme::Theme;
use crate::ui::text_or_placeholder;
use crate::ui::{concept, development, outcome};
use crate::util::scroll::{scroll_progress, PHASE_SCROLL_SPAN};

/// Seconds a phase takes to fade in after a switch.
const PHASE_FADE_SECS: f64 = 0.25;

/// Uploaded textures for one sketch pair.
#[derive(Default)]
pub struct SketchTextures {
    pub initial: Option<egui::TextureHandle>,
    pub final_image: Option<egui::TextureHandle>,
}

/// Display an open case study.
pub fn show(
    ui: &mut egui::Ui,
    study: &CaseStudy,
    state: &mut ViewerState,
    sketches: &[SketchTextures],
    theme: Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.heading(
            egui::RichText::new(text_or_placeholder(&study.title))
                .size(28.0)
                .color(theme.accent()),
        );
        ui.label(egui::RichText::new(text_or_placeholder(&study.description)).weak());
        ui.add_space(4.0);
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show_viewport(ui, |ui, viewport| {
            // The scroll run spans several viewport heights; the phase
            // is derived from how far through it we are.
            let span = (viewport.height() * PHASE_SCROLL_SPAN).max(viewport.height());
            ui.set_min_height(span);

            let progress = scroll_progress(
                viewport.top() as f64,
                span as f64,
                viewport.height() as f64,
            );
            let now = ui.input(|i| i.time);
            state.observe_progress(progress, now);

            // Pin the active sub-view to the visible region.
            ui.add_space(viewport.top());

            let fade = ((now - state.phase_entered_at) / PHASE_FADE_SECS).clamp(0.0, 1.0);
            ui.set_opacity(fade as f32);
            if fade < 1.0 {
                ui.ctx().request_repaint();
            }

            phase_breadcrumb(ui, state.phase, theme);
            ui.add_space(12.0);

            match state.phase {
                Phase::Concept => concept::show(ui, study, sketches, theme),
                Phase::Development => development::show(ui, study, state, theme),
                Phase::Outcome => outcome::show(ui, study, theme),
            }
        });
}

/// Row of the three phase names with the active one highlighted.
fn phase_breadcrumb(ui: &mut egui::Ui, active: Phase, theme: Theme) {
    ui.horizontal(|ui| {
        for phase in [Phase::Concept, Phase::Development, Phase::Outcome] {
            let text = if phase == active {
                egui::RichText::new(phase.label())
                    .strong()
                    .color(theme.accent())
            } else {
                egui::RichText::new(phase.label()).weak()
            };
            ui.label(text);
            if phase != Phase::Outcome {
                ui.label(egui::RichText::new("·").weak());
            }
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new("scroll to continue the story")
                    .small()
                    .italics()
                    .weak(),
            );
        });
    });
}

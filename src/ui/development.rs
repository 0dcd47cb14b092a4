// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Development phase sub-view.
//!
//! Renders the code snippet list. Each snippet card has an annotation
//! toggle; at most one snippet shows its annotations at a time.
//! Hovering a card only drives visual emphasis.

use crate::models::case_study::{CaseStudy, CodeSnippet};
use crate::models::viewer::ViewerState;
use crate::ui::theme::Theme;
use crate::ui::text_or_placeholder;

/// Display the development phase: the annotated snippet cards.
pub fn show(ui: &mut egui::Ui, study: &CaseStudy, state: &mut ViewerState, theme: Theme) {
    if study.code_snippets.is_empty() {
        ui.label(
            egui::RichText::new("No code snippets for this project.")
                .italics()
                .weak(),
        );
        return;
    }

    let mut hovered = None;

    for (index, snippet) in study.code_snippets.iter().enumerate() {
        // Emphasis uses last frame's hover; one frame of lag is invisible.
        let emphasized = state.hovered_snippet == Some(index);
        let expanded = state.is_expanded(index);

        let mut frame = egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(12.0));
        if emphasized {
            frame = frame.stroke(egui::Stroke::new(1.5, theme.accent()));
        }

        let response = frame
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(text_or_placeholder(&snippet.title))
                            .strong()
                            .color(theme.accent()),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let toggle = ui
                            .selectable_label(expanded, "💬")
                            .on_hover_text("Toggle annotations");
                        if toggle.clicked() {
                            state.toggle_snippet(index);
                        }
                    });
                });

                ui.add_space(4.0);
                snippet_body(ui, snippet, expanded, theme);
            })
            .response;

        if response.contains_pointer() {
            hovered = Some(index);
        }

        ui.add_space(8.0);
    }

    state.hovered_snippet = hovered;
}

/// Render the snippet code line by line, with inline notes when expanded.
fn snippet_body(ui: &mut egui::Ui, snippet: &CodeSnippet, expanded: bool, theme: Theme) {
    ui.spacing_mut().item_spacing.y = 2.0;

    for (i, line) in snippet.code.lines().enumerate() {
        let line_no = i + 1;
        let annotated = snippet.has_note(line_no);

        let mut text = egui::RichText::new(line).monospace();
        if annotated {
            text = text.background_color(theme.note_highlight());
        }
        ui.label(text);

        // A note renders only for the expanded snippet, and only on a
        // line that actually exists in the code.
        if expanded {
            if let Some(note) = snippet.note_for_line(line_no) {
                ui.label(
                    egui::RichText::new(format!("▸ {}", note))
                        .small()
                        .italics()
                        .color(ui.visuals().weak_text_color()),
                );
            }
        }
    }
}

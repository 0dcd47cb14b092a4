// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Concept phase sub-view.
//!
//! Shows the problem/solution summary card and the sketch gallery.
//! Each sketch tile displays the initial concept image and swaps to
//! the final implementation while the pointer hovers it; the swap is
//! purely visual and writes no state.

use crate::models::case_study::CaseStudy;
use crate::ui::theme::Theme;
use crate::ui::viewer::SketchTextures;
use crate::ui::text_or_placeholder;

/// Aspect ratio of a sketch tile (16:9).
const SKETCH_ASPECT: f32 = 9.0 / 16.0;

/// Display the concept phase: problem/solution plus sketches.
pub fn show(ui: &mut egui::Ui, study: &CaseStudy, sketches: &[SketchTextures], theme: Theme) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("Problem")
                    .strong()
                    .size(18.0)
                    .color(theme.problem_color()),
            );
            ui.label(
                egui::RichText::new(text_or_placeholder(&study.problem)).monospace(),
            );

            ui.add_space(12.0);

            ui.label(
                egui::RichText::new("Solution")
                    .strong()
                    .size(18.0)
                    .color(theme.solution_color()),
            );
            ui.label(
                egui::RichText::new(text_or_placeholder(&study.solution)).monospace(),
            );
        });

    if study.sketches.is_empty() {
        return;
    }

    ui.add_space(16.0);

    // Two tiles per row, like the original gallery grid.
    let spacing = ui.spacing().item_spacing.x;
    let tile_width = ((ui.available_width() - spacing) / 2.0).max(120.0);
    let tile_size = egui::vec2(tile_width, tile_width * SKETCH_ASPECT);

    for (row_start, row) in study.sketches.chunks(2).enumerate() {
        ui.horizontal(|ui| {
            for (offset, sketch) in row.iter().enumerate() {
                let index = row_start * 2 + offset;
                let textures = sketches.get(index);
                sketch_tile(ui, tile_size, &sketch.initial, textures);
            }
        });
        ui.add_space(spacing);
    }
}

/// One gallery tile: initial image, final image while hovered.
fn sketch_tile(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    label: &str,
    textures: Option<&SketchTextures>,
) {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let shown = textures.and_then(|t| {
        if response.hovered() {
            t.final_image.as_ref().or(t.initial.as_ref())
        } else {
            t.initial.as_ref()
        }
    });

    let painter = ui.painter();
    match shown {
        Some(texture) => {
            painter.image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        None => {
            // Image missing or still loading: labelled placeholder.
            painter.rect_filled(rect, 6.0, ui.visuals().extreme_bg_color);
            painter.rect_stroke(rect, 6.0, ui.visuals().widgets.noninteractive.bg_stroke);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                text_or_placeholder(label),
                egui::FontId::proportional(12.0),
                ui.visuals().weak_text_color(),
            );
        }
    }
}

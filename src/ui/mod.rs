// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Folio application.

pub mod concept;
pub mod development;
pub mod outcome;
pub mod projects;
pub mod theme;
pub mod viewer;

/// Substitute missing display text with a placeholder instead of
/// failing the render.
pub(crate) fn text_or_placeholder(text: &str) -> &str {
    if text.trim().is_empty() {
        "—"
    } else {
        text
    }
}

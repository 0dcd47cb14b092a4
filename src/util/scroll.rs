// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scroll position math.
//!
//! This module converts a raw scroll offset into the normalized
//! progress value that drives the narrative phase of the case-study
//! viewer.

/// How many viewport heights the viewer's scroll run spans.
pub const PHASE_SCROLL_SPAN: f32 = 3.0;

/// Normalized scroll progress through a container.
///
/// `offset` is how far the container's top edge has moved past the
/// viewport top. Progress is `offset / (content_height - viewport_height)`,
/// which may fall outside 0..1 near the scroll bounds; callers map the
/// value rather than reject it.
///
/// When the content is no taller than the viewport the division is
/// degenerate and progress is defined as 0.
pub fn scroll_progress(offset: f64, content_height: f64, viewport_height: f64) -> f64 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    offset / scrollable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::viewer::Phase;

    #[test]
    fn test_progress_midway() {
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
    }

    #[test]
    fn test_progress_before_container_enters_view() {
        assert!(scroll_progress(-200.0, 2000.0, 1000.0) < 0.0);
    }

    #[test]
    fn test_progress_past_container() {
        assert!(scroll_progress(1500.0, 2000.0, 1000.0) > 1.0);
    }

    #[test]
    fn test_short_content_pins_progress_to_zero() {
        // Content no taller than the viewport: progress is 0 at any offset.
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(300.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(300.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_short_content_always_resolves_to_concept() {
        for offset in [-100.0, 0.0, 250.0, 10_000.0] {
            let p = scroll_progress(offset, 1000.0, 1000.0);
            assert_eq!(Phase::from_progress(p), Phase::Concept);
        }
    }

    #[test]
    fn test_progress_maps_through_phase_thresholds() {
        let phase_at = |offset: f64| {
            Phase::from_progress(scroll_progress(offset, 2000.0, 1000.0))
        };
        assert_eq!(phase_at(0.0), Phase::Concept);
        assert_eq!(phase_at(330.0), Phase::Development);
        assert_eq!(phase_at(660.0), Phase::Outcome);
        assert_eq!(phase_at(1000.0), Phase::Outcome);
    }
}

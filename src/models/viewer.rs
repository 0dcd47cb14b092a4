// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer state machine.
//!
//! This module holds the ephemeral state of one open case-study viewer:
//! the scroll-derived narrative phase and the snippet expansion/hover
//! selection. A fresh `ViewerState` is created when a case study is
//! opened and discarded when the host closes it.

/// Narrative phase of a case study, derived from scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Concept,
    Development,
    Outcome,
}

/// Progress below this resolves to `Concept`.
pub const CONCEPT_END: f64 = 0.33;
/// Progress below this (and at or above `CONCEPT_END`) resolves to `Development`.
pub const DEVELOPMENT_END: f64 = 0.66;

impl Phase {
    /// Map a scroll progress value to a phase.
    ///
    /// Progress may be negative (container not yet in view) or greater
    /// than 1 (container fully passed); both are valid inputs.
    pub fn from_progress(progress: f64) -> Self {
        if progress < CONCEPT_END {
            Phase::Concept
        } else if progress < DEVELOPMENT_END {
            Phase::Development
        } else {
            Phase::Outcome
        }
    }

    /// Human-readable phase name for the viewer chrome.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Concept => "Concept",
            Phase::Development => "Development",
            Phase::Outcome => "Outcome",
        }
    }
}

/// Ephemeral state owned by one viewer instance.
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// Current narrative phase (derived, not independently settable)
    pub phase: Phase,
    /// Index of the snippet whose annotations are expanded, if any
    pub expanded_snippet: Option<usize>,
    /// Index of the snippet under the pointer (visual emphasis only)
    pub hovered_snippet: Option<usize>,
    /// UI time at which the current phase was entered (drives the entry fade)
    pub phase_entered_at: f64,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerState {
    /// Create state for a freshly opened case study.
    pub fn new() -> Self {
        Self {
            phase: Phase::Concept,
            expanded_snippet: None,
            hovered_snippet: None,
            phase_entered_at: 0.0,
        }
    }

    /// Feed the latest scroll progress into the state machine.
    ///
    /// Phase-local UI state does not survive a phase switch: leaving a
    /// phase collapses any expanded snippet. Returns true when the
    /// phase changed.
    pub fn observe_progress(&mut self, progress: f64, now: f64) -> bool {
        let next = Phase::from_progress(progress);
        if next == self.phase {
            return false;
        }
        log::debug!("phase {} -> {}", self.phase.label(), next.label());
        self.phase = next;
        self.phase_entered_at = now;
        self.expanded_snippet = None;
        self.hovered_snippet = None;
        true
    }

    /// Toggle the annotation expansion of snippet `index`.
    ///
    /// Toggling the expanded snippet collapses it; toggling any other
    /// snippet expands that one, implicitly collapsing the previous.
    pub fn toggle_snippet(&mut self, index: usize) {
        self.expanded_snippet = if self.expanded_snippet == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Whether snippet `index` currently shows its annotations.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded_snippet == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_thresholds() {
        assert_eq!(Phase::from_progress(0.0), Phase::Concept);
        assert_eq!(Phase::from_progress(0.3299), Phase::Concept);
        assert_eq!(Phase::from_progress(0.33), Phase::Development);
        assert_eq!(Phase::from_progress(0.5), Phase::Development);
        assert_eq!(Phase::from_progress(0.6599), Phase::Development);
        assert_eq!(Phase::from_progress(0.66), Phase::Outcome);
        assert_eq!(Phase::from_progress(1.0), Phase::Outcome);
    }

    #[test]
    fn test_out_of_bound_progress_is_mapped_not_rejected() {
        assert_eq!(Phase::from_progress(-0.5), Phase::Concept);
        assert_eq!(Phase::from_progress(3.7), Phase::Outcome);
    }

    #[test]
    fn test_toggle_same_snippet_collapses() {
        let mut state = ViewerState::new();
        state.toggle_snippet(2);
        assert_eq!(state.expanded_snippet, Some(2));
        state.toggle_snippet(2);
        assert_eq!(state.expanded_snippet, None);
    }

    #[test]
    fn test_toggle_other_snippet_switches_selection() {
        let mut state = ViewerState::new();
        state.toggle_snippet(0);
        state.toggle_snippet(3);
        assert_eq!(state.expanded_snippet, Some(3));
    }

    #[test]
    fn test_phase_switch_resets_expansion() {
        let mut state = ViewerState::new();
        state.observe_progress(0.5, 1.0);
        assert_eq!(state.phase, Phase::Development);
        state.toggle_snippet(1);

        // Scroll out of development and back in.
        assert!(state.observe_progress(0.8, 2.0));
        assert!(state.observe_progress(0.5, 3.0));
        assert_eq!(state.expanded_snippet, None);
    }

    #[test]
    fn test_observe_same_phase_keeps_state() {
        let mut state = ViewerState::new();
        state.observe_progress(0.4, 1.0);
        state.toggle_snippet(0);
        assert!(!state.observe_progress(0.6, 2.0));
        assert_eq!(state.expanded_snippet, Some(0));
        assert_eq!(state.phase_entered_at, 1.0);
    }
}

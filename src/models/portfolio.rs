// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio document.
//!
//! This module defines the top-level serialized document: the
//! developer's identity plus the list of project case studies shown on
//! the list screen.

use super::case_study::CaseStudy;
use serde::{Deserialize, Serialize};

/// Sample portfolio bundled into the binary so the app starts populated.
const SAMPLE_PORTFOLIO: &str = include_str!("../../assets/portfolio.yaml");

/// Complete portfolio data for serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub projects: Vec<CaseStudy>,
}

impl Portfolio {
    /// The portfolio document embedded in the binary.
    pub fn bundled() -> Self {
        match serde_yaml::from_str(SAMPLE_PORTFOLIO) {
            Ok(portfolio) => portfolio,
            Err(e) => {
                log::error!("Bundled portfolio is malformed: {}", e);
                Portfolio::default()
            }
        }
    }

    /// Look up a case study by index.
    pub fn project(&self, index: usize) -> Option<&CaseStudy> {
        self.projects.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_portfolio_parses() {
        let portfolio = Portfolio::bundled();
        assert!(!portfolio.name.is_empty());
        assert!(!portfolio.projects.is_empty());
    }

    #[test]
    fn test_bundled_annotations_reference_valid_lines() {
        let portfolio = Portfolio::bundled();
        for study in &portfolio.projects {
            for snippet in &study.code_snippets {
                for note in &snippet.annotations {
                    assert!(note.line >= 1 && note.line <= snippet.line_count());
                }
            }
        }
    }

    #[test]
    fn test_project_lookup() {
        let portfolio = Portfolio::bundled();
        assert!(portfolio.project(0).is_some());
        assert!(portfolio.project(portfolio.projects.len()).is_none());
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Case-study data structures.
//!
//! This module defines the immutable data describing one portfolio
//! project: problem/solution text, impact metrics, annotated code
//! snippets, contributions, and concept sketches.

use serde::{Deserialize, Serialize};

/// One measured outcome of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactMetric {
    #[serde(default)]
    pub metric: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub improvement: String,
}

/// A note attached to a specific 1-based line of a code snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineNote {
    pub line: usize,
    #[serde(default)]
    pub note: String,
}

/// A titled code excerpt with optional per-line annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub annotations: Vec<LineNote>,
}

impl CodeSnippet {
    /// Number of lines in the snippet's code.
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }

    /// Whether the given 1-based line carries an annotation.
    pub fn has_note(&self, line: usize) -> bool {
        self.note_for_line(line).is_some()
    }

    /// Look up the annotation note for a 1-based line number.
    ///
    /// Notes referencing lines outside the snippet's code are treated
    /// as absent; they are never an error.
    pub fn note_for_line(&self, line: usize) -> Option<&str> {
        if line == 0 || line > self.line_count() {
            return None;
        }
        self.annotations
            .iter()
            .find(|a| a.line == line)
            .map(|a| a.note.as_str())
    }
}

/// A pair of concept images: the initial sketch and the final result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sketch {
    #[serde(default)]
    pub initial: String,
    #[serde(default, rename = "final")]
    pub final_image: String,
}

/// Complete data for one project case study.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub impact: Vec<ImpactMetric>,
    #[serde(default)]
    pub code_snippets: Vec<CodeSnippet>,
    #[serde(default)]
    pub contribution: Vec<String>,
    #[serde(default)]
    pub sketches: Vec<Sketch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(code: &str, notes: &[(usize, &str)]) -> CodeSnippet {
        CodeSnippet {
            title: "test".to_string(),
            code: code.to_string(),
            annotations: notes
                .iter()
                .map(|(line, note)| LineNote {
                    line: *line,
                    note: note.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_note_lookup_on_annotated_line() {
        let s = snippet("x\ny\nz", &[(2, "here")]);
        assert_eq!(s.note_for_line(2), Some("here"));
        assert_eq!(s.note_for_line(1), None);
        assert_eq!(s.note_for_line(3), None);
    }

    #[test]
    fn test_out_of_range_note_is_never_surfaced() {
        let s = snippet("a\nb\nc", &[(5, "dangling")]);
        for line in 0..=10 {
            assert_eq!(s.note_for_line(line), None);
        }
    }

    #[test]
    fn test_line_zero_is_not_a_line() {
        let s = snippet("only", &[(0, "bad")]);
        assert_eq!(s.note_for_line(0), None);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(snippet("x\ny\nz", &[]).line_count(), 3);
        assert_eq!(snippet("", &[]).line_count(), 0);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let study: CaseStudy =
            serde_yaml::from_str("id: p1\ntitle: Demo").expect("parse");
        assert_eq!(study.id, "p1");
        assert!(study.problem.is_empty());
        assert!(study.code_snippets.is_empty());
        assert!(study.sketches.is_empty());
    }
}

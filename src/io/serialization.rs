// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio document deserialization.
//!
//! This module handles loading portfolio data in YAML and JSON
//! formats.

use crate::models::portfolio::Portfolio;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Import portfolio data from YAML format.
pub fn import_yaml(path: &Path) -> Result<Portfolio> {
    let yaml = std::fs::read_to_string(path)?;
    let data = serde_yaml::from_str(&yaml)?;
    Ok(data)
}

/// Import portfolio data from JSON format.
pub fn import_json(path: &Path) -> Result<Portfolio> {
    let json = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    Ok(data)
}

/// Import a portfolio document, dispatching on the file extension.
pub fn import_portfolio(path: &Path) -> Result<Portfolio> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => Err(anyhow!("Unsupported file extension: {:?}", extension)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_json_portfolio() {
        let json = r#"{
            "name": "Test Dev",
            "tagline": "makes things",
            "projects": [{
                "id": "p1",
                "title": "Thing",
                "code_snippets": [{
                    "title": "A",
                    "code": "x\ny\nz",
                    "annotations": [{"line": 2, "note": "here"}]
                }]
            }]
        }"#;
        let dir = std::env::temp_dir();
        let path = dir.join("folio_test_portfolio.json");
        std::fs::write(&path, json).expect("write temp file");

        let portfolio = import_portfolio(&path).expect("import");
        assert_eq!(portfolio.name, "Test Dev");
        let snippet = &portfolio.projects[0].code_snippets[0];
        assert_eq!(snippet.note_for_line(2), Some("here"));
        assert_eq!(snippet.note_for_line(1), None);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = import_portfolio(Path::new("portfolio.txt"));
        assert!(err.is_err());
    }
}

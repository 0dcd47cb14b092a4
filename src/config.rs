// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration persistence.
//!
//! The config is a small TOML file in the platform config directory;
//! currently it only remembers the chosen theme. Any failure to read
//! or parse it falls back to defaults.

use crate::ui::theme::Theme;
use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted application settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: Theme,
}

/// Path of the config file, if a config directory can be determined.
fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "folio", "folio")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

impl AppConfig {
    /// Load the config, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            log::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the config to disk.
    pub fn save(&self) -> Result<()> {
        let path = config_path().ok_or_else(|| anyhow!("No config directory"))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        std::fs::write(&path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig {
            theme: Theme::Light,
        };
        let text = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.theme, Theme::Light);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let parsed: AppConfig = toml::from_str("").expect("parse");
        assert_eq!(parsed.theme, Theme::default());
    }
}

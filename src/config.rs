// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// User configuration persisted as JSON in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constant::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_OUTPUT_EXT, DEFAULT_OUTPUT_SUFFIX, FALLBACK_OUTPUT_STEM,
};

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory for derived output paths. `None` writes next to the input.
    pub default_output_dir: Option<PathBuf>,
    /// Suffix appended to the input stem when no output path is given.
    pub output_suffix: String,
    /// Extension for derived output paths. `None` keeps the input's extension.
    pub output_extension: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_output_dir: None,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            output_extension: None,
        }
    }
}

impl AppConfig {
    /// Location of the per-user config file, if the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the per-user config.
    ///
    /// A missing file yields defaults. A broken file is logged and also
    /// yields defaults, so a bad config never keeps the tool from starting.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::debug!("No platform config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring config {}: {e:#}", path.display());
            Self::default()
        })
    }

    /// Load a config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pretty-printed JSON form, as written to disk.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Derive an output path for `input` when the user gave none.
    ///
    /// `photo.jpg` becomes `<dir>/photo_cropped.jpg`, where `<dir>` is
    /// `default_output_dir` or the input's own directory.
    #[must_use]
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(FALLBACK_OUTPUT_STEM);

        let ext = self
            .output_extension
            .as_deref()
            .or_else(|| input.extension().and_then(|e| e.to_str()))
            .unwrap_or(DEFAULT_OUTPUT_EXT);

        let file_name = format!("{stem}{}.{ext}", self.output_suffix);

        match &self.default_output_dir {
            Some(dir) => dir.join(file_name),
            None => input
                .parent()
                .map_or_else(|| PathBuf::from(&file_name), |dir| dir.join(&file_name)),
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airport::EXCESSIVE_RUNWAY_KM;
use crate::classify::MIN_RUNWAY_KM;
use crate::error::ConfigError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Distance limits used while loading and classifying.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub excessive_runway_km: f64,
    pub min_runway_km: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            excessive_runway_km: EXCESSIVE_RUNWAY_KM,
            min_runway_km: MIN_RUNWAY_KM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Degrees added around the airport bounding box before rendering.
    pub margin_deg: f64,
    pub image_size_px: u32,
    pub thresholds: Thresholds,
    pub hashtags: Vec<String>,
    pub visibility: String,
    pub language: String,
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("render"),
            margin_deg: 0.002,
            image_size_px: 1024,
            thresholds: Thresholds::default(),
            hashtags: ["#airport", "#aviation", "#avgeeks", "#GIS"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            visibility: "public".to_string(),
            language: "en".to_string(),
            seed: None,
        }
    }
}

impl BotConfig {
    /// Reads a config file. A missing file is not an error and yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        ProjectDirs::from("org", "x-adox", "aptbot")
            .map(|dirs| dirs.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("config.json"))
    }
}

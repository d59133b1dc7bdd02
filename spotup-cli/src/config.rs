//! Global spotup configuration.
//!
//! Presentation preferences only; application state (events, profile) is
//! never written to disk.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};
use spotup_core::error::{SpotUpError, SpotUpResult};
use spotup_core::map::MAP_CENTER;

const DEFAULT_MAP_WIDTH: usize = 56;
const DEFAULT_MAP_HEIGHT: usize = 18;

fn default_map_width() -> usize {
    DEFAULT_MAP_WIDTH
}

fn default_map_height() -> usize {
    DEFAULT_MAP_HEIGHT
}

fn is_default_map_width(w: &usize) -> bool {
    *w == DEFAULT_MAP_WIDTH
}

fn is_default_map_height(h: &usize) -> bool {
    *h == DEFAULT_MAP_HEIGHT
}

/// Global configuration at ~/.config/spotup/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct SpotupConfig {
    /// Map grid size, in terminal cells.
    #[serde(default = "default_map_width", skip_serializing_if = "is_default_map_width")]
    pub map_width: usize,
    #[serde(default = "default_map_height", skip_serializing_if = "is_default_map_height")]
    pub map_height: usize,

    /// Viewport center override; defaults to the product's reference view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_lng: Option<f64>,
}

impl Default for SpotupConfig {
    fn default() -> Self {
        SpotupConfig {
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            center_lat: None,
            center_lng: None,
        }
    }
}

impl SpotupConfig {
    pub fn config_path() -> SpotUpResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SpotUpError::Config("Could not determine config directory".into()))?
            .join("spotup");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> SpotUpResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: SpotupConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| SpotUpError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SpotUpError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Effective viewport center.
    pub fn center(&self) -> (f64, f64) {
        (
            self.center_lat.unwrap_or(MAP_CENTER.0),
            self.center_lng.unwrap_or(MAP_CENTER.1),
        )
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> SpotUpResult<()> {
        let contents = format!(
            "\
# spotup configuration

# Map grid size, in terminal cells:
# map_width = {DEFAULT_MAP_WIDTH}
# map_height = {DEFAULT_MAP_HEIGHT}

# Viewport center override:
# center_lat = {}
# center_lng = {}
",
            MAP_CENTER.0, MAP_CENTER.1
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SpotUpError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SpotUpError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

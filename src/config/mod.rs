// SPDX-License-Identifier: MPL-2.0
//! This module handles the project configuration, including loading and saving
//! the configured viewport dimensions to a `settings.toml` file.
//!
//! The viewport dimensions are the sole source of the preview panel's aspect
//! ratio; everything else about the panel is derived at runtime.
//!
//! # Examples
//!
//! ```no_run
//! use scene_lens::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.viewport_width = 1280.0;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::preview_panel::AspectRatio;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SceneLens";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Width of the project viewport the preview camera renders into.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    /// Height of the project viewport the preview camera renders into.
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
}

fn default_viewport_width() -> f32 {
    DEFAULT_VIEWPORT_WIDTH
}

fn default_viewport_height() -> f32 {
    DEFAULT_VIEWPORT_HEIGHT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Config {
    /// Derives the panel aspect ratio (height over width) from the
    /// configured viewport. Non-positive dimensions fall back to 1:1.
    #[must_use]
    pub fn aspect_ratio(&self) -> AspectRatio {
        AspectRatio::from_viewport(self.viewport_width, self.viewport_height)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

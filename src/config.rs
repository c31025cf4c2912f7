// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

use crate::error::Result;
use crate::ui::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

/// Seconds between automatic slide advances while the lightbox is open.
pub const DEFAULT_SLIDE_INTERVAL_SECS: u64 = 5;

/// Order in which scanned gallery items are presented. The presentation
/// order is what defines next/previous adjacency in the lightbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Sort by file name, case-insensitive.
    #[default]
    Alphabetical,
    /// Most recently modified first.
    Newest,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Slideshow auto-advance interval in seconds.
    #[serde(default)]
    pub slide_interval_secs: Option<u64>,
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
    #[serde(default)]
    pub theme: Option<ThemeMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slide_interval_secs: Some(DEFAULT_SLIDE_INTERVAL_SECS),
            sort_order: Some(SortOrder::Alphabetical),
            theme: None,
        }
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
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

//! Application configuration
//!
//! JSON file in the platform config directory. Holds only host concerns
//! (logging, window geometry, font files); article settings are never saved.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub window: WindowSettings,
    /// Font family name → font file loaded into the article view
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub font_files: HashMap<String, PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_width")]
    pub width: f32,
    #[serde(default = "default_window_height")]
    pub height: f32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_width() -> f32 {
    1280.0
}

fn default_window_height() -> f32 {
    860.0
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            window: WindowSettings::default(),
            font_files: HashMap::new(),
        }
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load configuration from `path`, writing defaults if the file is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, creating default config");
            let config = Config::default();
            config.save(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        info!(path = %path.display(), fonts = config.font_files.len(), "Loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, json).with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.window.width, 1280.0);
        assert_eq!(config.window.height, 860.0);
        assert!(config.font_files.is_empty());
    }

    #[test]
    fn test_partial_window_section() {
        let config: Config = serde_json::from_str(r#"{ "window": { "width": 900 } }"#).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.window.height, 860.0);
    }

    #[test]
    fn test_load_missing_file_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config::load(&path).unwrap();
        assert_eq!(config.log_level, "info");
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load_keeps_font_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.font_files.insert("Ubuntu".to_string(), PathBuf::from("/fonts/Ubuntu-Regular.ttf"));
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(
            loaded.font_files.get("Ubuntu"),
            Some(&PathBuf::from("/fonts/Ubuntu-Regular.ttf"))
        );
    }

    #[test]
    fn test_load_malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse JSON"));
    }
}

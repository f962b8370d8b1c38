// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading
//! and saving endpoint overrides to a `settings.toml` file.
//!
//! Every field is optional in the file; accessors fall back to the
//! defaults in [`defaults`], so a missing or partial file never blocks
//! startup.

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "EtherShowcase";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gallery_url: Option<String>,
    #[serde(default)]
    pub media_base: Option<String>,
    #[serde(default)]
    pub token_price_url: Option<String>,
    #[serde(default)]
    pub eth_price_url: Option<String>,
    #[serde(default)]
    pub home_section: Option<String>,
    #[serde(default)]
    pub contract_address: Option<String>,
}

impl Config {
    pub fn gallery_url(&self) -> &str {
        self.gallery_url
            .as_deref()
            .unwrap_or(defaults::DEFAULT_GALLERY_URL)
    }

    pub fn media_base(&self) -> &str {
        self.media_base
            .as_deref()
            .unwrap_or(defaults::DEFAULT_MEDIA_BASE)
    }

    pub fn token_price_url(&self) -> &str {
        self.token_price_url
            .as_deref()
            .unwrap_or(defaults::DEFAULT_TOKEN_PRICE_URL)
    }

    pub fn eth_price_url(&self) -> &str {
        self.eth_price_url
            .as_deref()
            .unwrap_or(defaults::DEFAULT_ETH_PRICE_URL)
    }

    pub fn home_section(&self) -> &str {
        self.home_section
            .as_deref()
            .unwrap_or(defaults::DEFAULT_HOME_SECTION)
    }

    pub fn contract_address(&self) -> &str {
        self.contract_address
            .as_deref()
            .unwrap_or(defaults::DEFAULT_CONTRACT_ADDRESS)
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

/// Loads from an explicit directory, used by the `--config-dir` flag.
pub fn load_from_dir(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        load_from_path(&path)
    } else {
        Ok(Config::default())
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_endpoints() {
        let config = Config {
            gallery_url: Some("https://example.net/listing".to_string()),
            home_section: Some("timeline".to_string()),
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.gallery_url(), "https://example.net/listing");
        assert_eq!(loaded.home_section(), "timeline");
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.gallery_url.is_none());
    }

    #[test]
    fn missing_file_in_dir_yields_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load_from_dir(temp_dir.path()).expect("load");
        assert_eq!(loaded.gallery_url(), defaults::DEFAULT_GALLERY_URL);
        assert_eq!(loaded.home_section(), defaults::DEFAULT_HOME_SECTION);
    }

    #[test]
    fn accessors_fall_back_field_by_field() {
        let config = Config {
            token_price_url: Some("https://example.net/t".to_string()),
            ..Config::default()
        };
        assert_eq!(config.token_price_url(), "https://example.net/t");
        assert_eq!(config.eth_price_url(), defaults::DEFAULT_ETH_PRICE_URL);
    }
}

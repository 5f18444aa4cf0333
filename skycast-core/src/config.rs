use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Top-level configuration, optionally loaded from disk.
///
/// Open-Meteo needs no API key, so every field has a sensible default and a
/// config file is only needed to point at a different endpoint (tests,
/// proxies) or to tune the request timeout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Geocoding search endpoint.
    pub geocoding_url: String,

    /// Current-conditions forecast endpoint.
    pub forecast_url: String,

    /// Language requested for geocoding results.
    pub language: String,

    /// Per-request timeout in seconds. A hung upstream call would otherwise
    /// block the invocation indefinitely.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: "https://geocoding-api.open-meteo.com/v1/search".to_string(),
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            language: "en".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

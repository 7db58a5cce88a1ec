//! Runtime settings.
//!
//! Layered: built-in defaults, then `~/.outlet-locator/settings.json`, then
//! the `OUTLETS_API_URL` environment variable. CLI flags go on top in
//! `main.rs`. Missing file or missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::proximity::PROXIMITY_RADIUS_KM;

pub const API_URL_ENV: &str = "OUTLETS_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the outlet API; `/outlets` is appended.
    pub api_base: String,
    pub host: String,
    pub port: u16,
    pub proximity_radius_km: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8000".into(),
            host: "127.0.0.1".into(),
            port: 3000,
            proximity_radius_km: PROXIMITY_RADIUS_KM,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Settings {
    /// Defaults, the user's settings file and the environment.
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Self::load_from(&Self::default_path())?;
        Ok(settings.with_api_base(std::env::var(API_URL_ENV).ok()))
    }

    /// Defaults overlaid with `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let data = match fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".outlet-locator")
            .join("settings.json")
    }

    /// Replace the API base when an override is present and non-empty.
    pub fn with_api_base(mut self, api_base: Option<String>) -> Self {
        if let Some(base) = api_base.filter(|b| !b.trim().is_empty()) {
            self.api_base = base;
        }
        self
    }
}

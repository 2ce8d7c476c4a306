//! Pipeline configuration — reads `elemental.toml` and falls back to the
//! stock settings when the file is absent or unreadable.

use crate::error::PipelineResult;
use crate::theme::WireframeTheme;
use elemental_types::DEFAULT_SITEURL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Default file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "elemental.toml";

/// `[pipeline]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// `siteurl` written when a document carries none.
    pub default_siteurl: String,
    /// Mode used by `clean` when the caller does not choose one.
    pub wireframe: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            default_siteurl: DEFAULT_SITEURL.to_string(),
            wireframe: false,
        }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 4080 }
    }
}

/// Full configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineSettings,
    pub wireframe: WireframeTheme,
    pub server: ServerSettings,
}

impl Config {
    /// Parses TOML text. Missing sections and keys take their defaults.
    pub fn parse(contents: &str) -> PipelineResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from an explicit path.
    /// Falls back to defaults with a warning on read or parse errors.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

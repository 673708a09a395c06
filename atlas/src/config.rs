//! Configuration for globe.
//!
//! GLOBE_ROOT resolution order:
//! 1. Explicit path passed to Config::with_root()
//! 2. GLOBE_ROOT environment variable
//! 3. Default: platform config dir (~/.config/globe on Linux)
//!
//! GLOBE_ENDPOINT, when set, overrides the endpoint from config.toml.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Public countries GraphQL API.
pub const DEFAULT_ENDPOINT: &str = "https://countries.trevorblades.com/";

/// globe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config.toml and the log file (not stored in the file).
    #[serde(skip)]
    pub globe_root: PathBuf,

    /// GraphQL endpoint to query.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Create a new config with the given GLOBE_ROOT.
    pub fn with_root(globe_root: impl Into<PathBuf>) -> Self {
        Self {
            globe_root: globe_root.into(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load config from GLOBE_ROOT/config.toml (or defaults), then apply env overrides.
    pub fn load() -> Result<Self> {
        let globe_root = resolve_globe_root()?;
        let mut config = Self::load_from(&globe_root)?;
        if let Ok(endpoint) = std::env::var("GLOBE_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint;
            }
        }
        Ok(config)
    }

    /// Load config from a specific GLOBE_ROOT.
    pub fn load_from(globe_root: &Path) -> Result<Self> {
        let config_path = globe_root.join("config.toml");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: Config = toml::from_str(&contents)
                .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
            config.globe_root = globe_root.to_path_buf();
            Ok(config)
        } else {
            Ok(Self::with_root(globe_root))
        }
    }

    /// Save config to GLOBE_ROOT/config.toml.
    pub fn save(&self) -> Result<()> {
        std::fs::create_dir_all(&self.globe_root)?;
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(self.config_path(), contents)?;
        Ok(())
    }

    /// Path to config.toml.
    pub fn config_path(&self) -> PathBuf {
        self.globe_root.join("config.toml")
    }

    /// Default log file for the interactive browser.
    pub fn log_path(&self) -> PathBuf {
        self.globe_root.join("cq.log")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Resolve GLOBE_ROOT using the standard resolution order.
fn resolve_globe_root() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("GLOBE_ROOT") {
        return Ok(PathBuf::from(path));
    }

    if let Some(proj_dirs) = ProjectDirs::from("", "", "globe") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = std::env::var("HOME")
        .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;
    Ok(PathBuf::from(home).join(".config/globe"))
}

//! Configuration management for kaald.
//!
//! Loads settings from $KAAL_CONFIG, /etc/kaal/config.toml or the user config
//! directory, falling back to defaults.

use anyhow::{Context, Result};
use kaal_common::wiki_client::api_url_for_language;
use kaal_common::{SiteEntry, SiteMap};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// System config file path
pub const CONFIG_PATH: &str = "/etc/kaal/config.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "KAAL_CONFIG";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Directory with the web UI, served at / when present
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_request_timeout() -> u64 {
    20
}

fn default_max_body_bytes() -> usize {
    16 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            static_dir: default_static_dir(),
            request_timeout_secs: default_request_timeout(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Wikipedia lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikipediaConfig {
    /// Language edition, used when api_url is not set
    #[serde(default = "default_language")]
    pub language: String,

    /// Explicit API endpoint (overrides language)
    #[serde(default)]
    pub api_url: Option<String>,

    /// HTTP timeout in seconds
    #[serde(default = "default_wiki_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_wiki_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("kaal/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            api_url: None,
            timeout_secs: default_wiki_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl WikipediaConfig {
    /// Effective API endpoint
    pub fn endpoint(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| api_url_for_language(&self.language))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Full daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub wikipedia: WikipediaConfig,

    /// Extra sites for "open ...", appended after the built-in ones
    #[serde(default)]
    pub sites: Vec<SiteEntry>,
}

impl Config {
    /// Load config from the first available location, or return defaults
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_path(&path) {
                Ok(config) => return config,
                Err(e) => warn!("Ignoring config {}: {:#}", path.display(), e),
            }
        }

        warn!("Config not found, using defaults");
        Config::default()
    }

    /// Search order: $KAAL_CONFIG, /etc/kaal/config.toml, user config dir
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            paths.push(PathBuf::from(path));
        }
        paths.push(PathBuf::from(CONFIG_PATH));
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("kaal").join("config.toml"));
        }
        paths
    }

    /// Load config from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Built-in sites merged with configured ones
    pub fn site_map(&self) -> SiteMap {
        SiteMap::with_entries(self.sites.iter().cloned())
    }
}

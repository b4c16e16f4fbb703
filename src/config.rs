use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub league: LeagueConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent on every upstream request; the API blocks generic agents.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Gameweeks fetched concurrently per batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LeagueConfig {
    #[serde(default = "default_league_id")]
    pub default_league_id: Option<u64>,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            default_league_id: default_league_id(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ShareConfig {
    /// Where shared digests are written. Defaults to `~/.fpl-wrapped/shares`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

// Defaults
fn default_base_url() -> String {
    std::env::var("FPL_API_BASE").unwrap_or_else(|_| "https://fantasy.premierleague.com/api".into())
}
fn default_user_agent() -> String {
    "FPL-Wrapped/1.0".into()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_ttl_secs() -> u64 {
    60 * 60
}
fn default_batch_size() -> usize {
    5
}
fn default_league_id() -> Option<u64> {
    Some(1_415_574)
}
fn default_max_suggestions() -> usize {
    5
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config {}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::config("api.base_url must not be empty"));
        }
        if self.engine.batch_size == 0 {
            return Err(Error::config("engine.batch_size must be at least 1"));
        }
        if self.cache.ttl_secs == 0 {
            return Err(Error::config("cache.ttl_secs must be at least 1"));
        }
        Ok(())
    }
}

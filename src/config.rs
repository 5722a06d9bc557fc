use crate::selection::SelectedSymbols;
use crate::symbol::ALLOWED_SYMBOLS;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid watchlist.default_symbols: {0}")]
    Watchlist(#[from] ValidationError),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    /// "hourly", "daily", anything else means no rotation
    pub rotation: String,
    /// When false, the SYMBOLS trace target is silenced
    pub enable_tracing: bool,
    #[serde(default)]
    pub watchlist: WatchlistConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WatchlistConfig {
    /// Selection used when nothing is stored under the selected-symbols key
    pub default_symbols: Vec<String>,
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            default_symbols: ALLOWED_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "crypto_watchlist.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            enable_tracing: false,
            watchlist: WatchlistConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `config/<env>.yaml`
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        Self::from_file(format!("config/{}.yaml", env))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate; the default selection must be a valid subset
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        config.default_selection()?;
        Ok(config)
    }

    pub fn default_selection(&self) -> Result<SelectedSymbols, ValidationError> {
        SelectedSymbols::try_from_strs(&self.watchlist.default_symbols)
    }
}

//! Configuration management for the Fitness Coach app
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FC__)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::AppResult;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// History storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the history files
    pub data_dir: String,
    pub workout_history_file: String,
    pub nutrition_history_file: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of pretty output
    pub json: bool,
    /// Filter used when RUST_LOG is unset
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            default_filter: "fitness_coach=info".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: "./data".to_string(),
                workout_history_file: "workout_history.json".to_string(),
                nutrition_history_file: "nutrition_history.json".to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FC__ prefix
    pub fn load() -> AppResult<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FC__ prefix)
            // e.g., FC__STORAGE__DATA_DIR=/var/lib/coach sets storage.data_dir
            .add_source(config::Environment::with_prefix("FC").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Point storage at another directory
    pub fn with_data_dir(mut self, data_dir: impl Into<String>) -> Self {
        self.storage.data_dir = data_dir.into();
        self
    }

    pub fn workout_history_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir).join(&self.storage.workout_history_file)
    }

    pub fn nutrition_history_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir).join(&self.storage.nutrition_history_file)
    }
}

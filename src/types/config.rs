//! Configuration types
//!
//! Process-level configuration resolved from the environment.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Overrides the directory holding settings and persisted selections
pub const DATA_DIR_ENV: &str = "VIEWSCOPE_DATA_DIR";
/// Overrides the default tracing filter (RUST_LOG still wins when set)
pub const LOG_FILTER_ENV: &str = "VIEWSCOPE_LOG";

const DEFAULT_LOG_FILTER: &str = "viewscope=info";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory for settings.json and the selection slots
    pub data_dir: PathBuf,
    /// Default `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl AppConfig {
    /// Resolve configuration from environment variables, falling back to the
    /// platform data directory.
    pub fn from_env() -> Result<Self, StorageError> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => get_data_dir()?,
        };
        let log_filter = std::env::var(LOG_FILTER_ENV)
            .ok()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            data_dir,
            log_filter,
        })
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    pub fn selections_dir(&self) -> PathBuf {
        self.data_dir.join("scene")
    }
}

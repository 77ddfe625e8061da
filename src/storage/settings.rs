//! Settings storage
//!
//! Manages persistence of the panel state that survives a restart. Calculator
//! inputs are not stored here; every session starts from the defaults.

use crate::storage::StorageError;
use crate::types::AppConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_true() -> bool {
    true
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Filter panel expanded
    #[serde(default = "default_true")]
    pub options_expanded: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            options_expanded: true,
        }
    }
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings(config: &AppConfig) -> AppSettings {
    match load_settings_from(&config.settings_path()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Internal settings loading with error propagation
fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let settings: AppSettings = serde_json::from_str(&json)?;

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(config: &AppConfig, settings: &AppSettings) -> Result<(), StorageError> {
    let path = config.settings_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}

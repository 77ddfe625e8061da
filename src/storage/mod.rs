//! Persistent storage
//!
//! This module handles persistence of filter selections and session settings.

pub mod scene;
pub mod selection;
pub mod settings;

use std::path::PathBuf;
use thiserror::Error;

pub use scene::{BlobStore, FileStore, MemoryStore};

/// Errors raised by the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine a data directory for this platform")]
    NoDataDir,
}

/// Platform data directory for the application.
///
/// Linux: ~/.local/share/viewscope, macOS: ~/Library/Application Support/com.Viewscope.Viewscope
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "Viewscope", "Viewscope")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}

//! Shared type definitions
//!
//! Catalog records, filter options and process configuration.

pub mod config;
pub mod entry;
pub mod option;

pub use config::AppConfig;
pub use entry::{LlmEntry, ParameterSize, ReleaseMonth};
pub use option::{FilterCategory, FilterOption, SelectionMode};

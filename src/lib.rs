//! Viewscope Library
//!
//! Core of the LLM release catalog browser: the bundled catalog, the
//! multi-criterion filter engine, persisted filter selections and the GPU
//! memory estimator. Presentation layers drive a [`app::Session`] and render
//! what it returns.

pub mod app;
pub mod catalog;
pub mod filter;
pub mod storage;
pub mod system;
pub mod types;

pub use app::Session;
pub use catalog::{Catalog, CatalogError};
pub use filter::{SelectionSet, Selections};
pub use types::{FilterCategory, FilterOption, LlmEntry};

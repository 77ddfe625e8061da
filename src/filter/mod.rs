//! Catalog filtering
//!
//! Typed filter criteria, per-category selection sets and the pure engine
//! that combines them with the catalog.

pub mod criteria;
pub mod engine;
pub mod selection;

pub use criteria::{SizeBucket, TimeWindow};
pub use engine::{apply, apply_selections, matching_indices};
pub use selection::{SelectionSet, Selections};

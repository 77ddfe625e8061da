//! Filter option types
//!
//! A `FilterOption` is an identity, not a value bag: two options are the same
//! option whenever their names match, whatever their ids.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// One selectable choice inside a filter category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOption {
    /// Per-instance id, ignored by equality and hashing
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
}

impl FilterOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for FilterOption {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FilterOption {}

impl Hash for FilterOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for FilterOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// How many options a category may hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Zero or more options, OR-combined
    Multiple,
    /// At most one option; selecting another replaces it
    Single,
}

/// The three filterable dimensions of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterCategory {
    License,
    Size,
    Time,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 3] = [
        FilterCategory::License,
        FilterCategory::Size,
        FilterCategory::Time,
    ];

    /// Storage slot holding this category's persisted selection.
    pub fn slot_key(&self) -> &'static str {
        match self {
            FilterCategory::License => "selectedOpenSourceTypes",
            FilterCategory::Size => "selectedModelSizes",
            FilterCategory::Time => "selectedYears",
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            FilterCategory::License | FilterCategory::Size => SelectionMode::Multiple,
            FilterCategory::Time => SelectionMode::Single,
        }
    }

    /// Section heading shown above the category's choices
    pub fn label(&self) -> &'static str {
        match self {
            FilterCategory::License => "OpenSource Type",
            FilterCategory::Size => "Model Size",
            FilterCategory::Time => "Time Period",
        }
    }
}

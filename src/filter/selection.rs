//! Selection sets
//!
//! Per-category sets of chosen filter options. Membership is by option name;
//! iteration order carries no meaning.

use crate::types::{FilterCategory, FilterOption, SelectionMode};
use std::collections::HashSet;

/// Options currently selected in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    mode: SelectionMode,
    options: HashSet<FilterOption>,
}

impl SelectionSet {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            options: HashSet::new(),
        }
    }

    pub fn multiple() -> Self {
        Self::new(SelectionMode::Multiple)
    }

    pub fn single() -> Self {
        Self::new(SelectionMode::Single)
    }

    /// Build a set from option names. In single mode only the first name is kept.
    pub fn from_names<I, N>(mode: SelectionMode, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut set = Self::new(mode);
        for name in names {
            if mode == SelectionMode::Single && !set.is_empty() {
                break;
            }
            set.options.insert(FilterOption::new(name));
        }
        set
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn contains(&self, option: &FilterOption) -> bool {
        self.options.contains(option)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterOption> {
        self.options.iter()
    }

    /// Selected names in lexical order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.options.iter().map(|o| o.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Add an option. A single-mode set drops its previous choice.
    pub fn select(&mut self, option: FilterOption) {
        if self.mode == SelectionMode::Single {
            self.options.clear();
        }
        self.options.insert(option);
    }

    pub fn deselect(&mut self, option: &FilterOption) -> bool {
        self.options.remove(option)
    }

    /// Flip an option's membership. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, option: FilterOption) -> bool {
        if self.deselect(&option) {
            false
        } else {
            self.select(option);
            true
        }
    }

    pub fn clear(&mut self) {
        self.options.clear();
    }
}

/// The three category slots owned by a browsing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
    pub license: SelectionSet,
    pub size: SelectionSet,
    pub time: SelectionSet,
}

impl Default for Selections {
    fn default() -> Self {
        Self {
            license: SelectionSet::new(FilterCategory::License.mode()),
            size: SelectionSet::new(FilterCategory::Size.mode()),
            time: SelectionSet::new(FilterCategory::Time.mode()),
        }
    }
}

impl Selections {
    pub fn get(&self, category: FilterCategory) -> &SelectionSet {
        match category {
            FilterCategory::License => &self.license,
            FilterCategory::Size => &self.size,
            FilterCategory::Time => &self.time,
        }
    }

    pub fn get_mut(&mut self, category: FilterCategory) -> &mut SelectionSet {
        match category {
            FilterCategory::License => &mut self.license,
            FilterCategory::Size => &mut self.size,
            FilterCategory::Time => &mut self.time,
        }
    }

    /// Number of categories with at least one selected option.
    pub fn active_count(&self) -> usize {
        FilterCategory::ALL
            .iter()
            .filter(|&&c| !self.get(c).is_empty())
            .count()
    }
}

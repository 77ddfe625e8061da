//! Browsing session
//!
//! Owns the catalog, the three selection slots, the panel settings, the
//! calculator input and the current filtered view. Every selection change is
//! followed by an explicit recompute of the visible entries and written to the
//! store. The calculator input lives only as long as the session.

use crate::catalog::Catalog;
use crate::filter::{engine, Selections};
use crate::storage::settings::AppSettings;
use crate::storage::{BlobStore, StorageError};
use crate::system::memory::{CalculatorInput, MemoryEstimate};
use crate::types::{FilterCategory, FilterOption, LlmEntry};
use chrono::NaiveDate;

pub struct Session<S: BlobStore> {
    catalog: Catalog,
    store: S,
    selections: Selections,
    settings: AppSettings,
    calculator: CalculatorInput,
    /// Indices into `catalog.entries()`
    visible: Vec<usize>,
    today: NaiveDate,
}

impl<S: BlobStore> Session<S> {
    /// Restore persisted selections from `store` and compute the first view.
    pub fn open(catalog: Catalog, store: S) -> Self {
        let selections = Selections {
            license: store.load_selection(FilterCategory::License),
            size: store.load_selection(FilterCategory::Size),
            time: store.load_selection(FilterCategory::Time),
        };

        let mut session = Self {
            catalog,
            store,
            selections,
            settings: AppSettings::default(),
            calculator: CalculatorInput::default(),
            visible: Vec::new(),
            today: chrono::Local::now().date_naive(),
        };
        session.recompute();

        tracing::info!(
            "Session opened: {} of {} entries visible, {} active filters",
            session.visible_count(),
            session.total_count(),
            session.selections.active_count()
        );
        session
    }

    /// Pin the reference date used by the time windows.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self.recompute();
        self
    }

    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Flip an option in a category. Returns whether it is selected afterwards.
    ///
    /// The in-memory state and the view are updated even if persisting fails.
    pub fn toggle(
        &mut self,
        category: FilterCategory,
        option: FilterOption,
    ) -> Result<bool, StorageError> {
        let selected = self.selections.get_mut(category).toggle(option);
        self.commit(category)?;
        Ok(selected)
    }

    pub fn select(
        &mut self,
        category: FilterCategory,
        option: FilterOption,
    ) -> Result<(), StorageError> {
        self.selections.get_mut(category).select(option);
        self.commit(category)
    }

    pub fn clear(&mut self, category: FilterCategory) -> Result<(), StorageError> {
        self.selections.get_mut(category).clear();
        self.commit(category)
    }

    /// Clear every category, persisting each slot.
    ///
    /// Every slot is written even if an earlier one fails. The first failure
    /// is returned.
    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        for category in FilterCategory::ALL {
            self.selections.get_mut(category).clear();
        }
        self.recompute();

        let mut first_error = None;
        for category in FilterCategory::ALL {
            if let Err(e) = self
                .store
                .save_selection(category, self.selections.get(category))
            {
                tracing::warn!("Failed to persist cleared {}: {}", category.slot_key(), e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn commit(&mut self, category: FilterCategory) -> Result<(), StorageError> {
        self.recompute();
        self.store
            .save_selection(category, self.selections.get(category))
    }

    /// Recompute the visible entries from the current selections.
    pub fn recompute(&mut self) {
        self.visible =
            engine::matching_indices(self.catalog.entries(), &self.selections, self.today);
        tracing::debug!(
            "Recomputed view: {}/{} entries",
            self.visible.len(),
            self.catalog.len()
        );
    }

    pub fn visible(&self) -> Vec<&LlmEntry> {
        let entries = self.catalog.entries();
        self.visible.iter().map(|&i| &entries[i]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    /// Fraction of the catalog currently visible, 0.0 for an empty catalog.
    pub fn match_ratio(&self) -> f64 {
        if self.catalog.is_empty() {
            return 0.0;
        }
        self.visible.len() as f64 / self.catalog.len() as f64
    }

    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    /// Candidate options for a category, in display order.
    pub fn options(&self, category: FilterCategory) -> Vec<FilterOption> {
        match category {
            FilterCategory::License => self.catalog.license_options(),
            FilterCategory::Size => self.catalog.size_options(),
            FilterCategory::Time => self.catalog.time_options(),
        }
    }

    pub fn is_selected(&self, category: FilterCategory, option: &FilterOption) -> bool {
        self.selections.get(category).contains(option)
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn options_expanded(&self) -> bool {
        self.settings.options_expanded
    }

    pub fn set_options_expanded(&mut self, expanded: bool) {
        self.settings.options_expanded = expanded;
    }

    pub fn calculator(&self) -> CalculatorInput {
        self.calculator
    }

    pub fn set_calculator(&mut self, input: CalculatorInput) {
        self.calculator = input;
    }

    pub fn estimate(&self) -> MemoryEstimate {
        self.calculator.estimate()
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

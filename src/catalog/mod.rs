//! Bundled LLM release catalog
//!
//! The dataset is embedded at build time and validated once when loaded.
//! Identifier problems are hard errors; malformed size or date strings are
//! kept as unparsed so the filters can exclude those entries.

use crate::filter::criteria::{SizeBucket, TimeWindow};
use crate::types::{FilterOption, LlmEntry, ParameterSize, ReleaseMonth};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Canonical license buckets. Every license string containing one of these
/// words is grouped under it.
pub const APACHE_BUCKET: &str = "Apache";
pub const CUSTOM_BUCKET: &str = "Custom";

/// A catalog record as stored in `data/catalog.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub parameter_size: String,
    pub license: String,
    pub release_date: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl From<EntryRecord> for LlmEntry {
    fn from(record: EntryRecord) -> Self {
        let parameters = ParameterSize::parse(&record.parameter_size);
        if parameters.is_none() {
            tracing::warn!(
                "Entry {} has unparseable parameter size '{}'",
                record.id,
                record.parameter_size
            );
        }

        let released = ReleaseMonth::parse(&record.release_date);
        if released.is_none() {
            tracing::warn!(
                "Entry {} has unparseable release date '{}'",
                record.id,
                record.release_date
            );
        }

        LlmEntry {
            id: record.id,
            name: record.name,
            organization: record.organization,
            parameter_size: record.parameter_size,
            license: record.license,
            release_date: record.release_date,
            description: record.description,
            link: record.link.filter(|l| !l.trim().is_empty()),
            parameters,
            released,
        }
    }
}

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),
    #[error("Entry at position {0} has an empty id")]
    EmptyId(usize),
    #[error("Entry {0} has an empty name")]
    EmptyName(String),
}

/// Immutable, ordered collection of LLM releases.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<LlmEntry>,
}

impl Catalog {
    /// Load the dataset embedded in the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parse and validate a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<EntryRecord> = serde_json::from_str(json)?;
        let catalog = Self::from_records(records)?;
        tracing::info!("Loaded catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    /// Validate records and keep them in their given order.
    pub fn from_records(records: Vec<EntryRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut entries = Vec::with_capacity(records.len());

        for (position, record) in records.into_iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if record.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(record.id));
            }
            if !seen.insert(record.id.clone()) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            entries.push(LlmEntry::from(record));
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LlmEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// License choices: distinct license strings with every Apache and Custom
    /// variant folded into its canonical bucket, sorted by name.
    pub fn license_options(&self) -> Vec<FilterOption> {
        let mut names: BTreeSet<&str> = self
            .entries
            .iter()
            .map(|e| e.license.as_str())
            .filter(|l| !l.contains(APACHE_BUCKET) && !l.contains(CUSTOM_BUCKET))
            .collect();
        names.insert(APACHE_BUCKET);
        names.insert(CUSTOM_BUCKET);
        names.into_iter().map(FilterOption::new).collect()
    }

    pub fn size_options(&self) -> Vec<FilterOption> {
        SizeBucket::ALL.iter().map(|b| b.option()).collect()
    }

    pub fn time_options(&self) -> Vec<FilterOption> {
        TimeWindow::ALL.iter().map(|w| w.option()).collect()
    }
}

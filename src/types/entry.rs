//! Catalog entry types
//!
//! Typed LLM release records. Size and date strings are parsed once when the
//! record is built, so the filters never re-parse per access.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// "70B", "1.5T", "3.8B". Anything else (e.g. "1M") is unparseable.
static SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*([BT])\s*$").expect("size pattern is valid"));

/// Parameter count of a model, normalized to billions.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct ParameterSize {
    billions: f64,
}

impl ParameterSize {
    pub fn from_billions(billions: f64) -> Self {
        Self { billions }
    }

    /// Parse a size string ending in "B" (billions) or "T" (trillions).
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = SIZE_PATTERN.captures(raw)?;
        let value: f64 = caps[1].parse().ok()?;
        let billions = match &caps[2] {
            "T" => value * 1000.0,
            _ => value,
        };
        Some(Self { billions })
    }

    pub fn billions(&self) -> f64 {
        self.billions
    }
}

/// Release date at "Month Year" granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReleaseMonth {
    year: i32,
    month: u32,
}

impl ReleaseMonth {
    /// Build from a year and a 1-based month. Returns `None` for month 0 or >12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Parse "October 2019" style strings. Abbreviated month names are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let date = NaiveDate::parse_from_str(&format!("1 {}", trimmed), "%d %B %Y").ok()?;
        Some(Self::of(date))
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Months elapsed since year 0, used for window arithmetic.
    pub fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    /// The month `months` before this one.
    pub fn minus_months(&self, months: u32) -> Self {
        let total = self.ordinal() - months as i64;
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32 + 1,
        }
    }

    /// "MM/yy", the short form shown on catalog cards.
    pub fn short_label(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

/// One LLM release in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct LlmEntry {
    pub id: String,
    pub name: String,
    pub organization: String,
    /// Size as written in the dataset, e.g. "70B"
    pub parameter_size: String,
    /// Free-text license category, e.g. "Apache 2.0"
    pub license: String,
    /// Release date as written in the dataset, e.g. "May 2023"
    pub release_date: String,
    pub description: String,
    pub link: Option<String>,
    /// Parsed `parameter_size`, `None` when the string is malformed
    pub parameters: Option<ParameterSize>,
    /// Parsed `release_date`, `None` when the string is malformed
    pub released: Option<ReleaseMonth>,
}

impl LlmEntry {
    /// Short release label ("05/23"), or the raw date when it could not be parsed.
    pub fn release_label(&self) -> String {
        self.released
            .map(|m| m.short_label())
            .unwrap_or_else(|| self.release_date.clone())
    }
}

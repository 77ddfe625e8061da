//! Filter engine
//!
//! Options within a category are OR-combined, categories are AND-combined.
//! An empty category places no constraint. Results keep catalog order.

use crate::catalog::{APACHE_BUCKET, CUSTOM_BUCKET};
use crate::filter::criteria::{SizeBucket, TimeWindow};
use crate::filter::selection::{SelectionSet, Selections};
use crate::types::LlmEntry;
use chrono::NaiveDate;

/// Entries matching every category, in dataset order.
pub fn apply<'a>(
    dataset: &'a [LlmEntry],
    license: &SelectionSet,
    size: &SelectionSet,
    time: &SelectionSet,
    today: NaiveDate,
) -> Vec<&'a LlmEntry> {
    dataset
        .iter()
        .filter(|entry| matches(entry, license, size, time, today))
        .collect()
}

/// Same as [`apply`] over a session's three slots.
pub fn apply_selections<'a>(
    dataset: &'a [LlmEntry],
    selections: &Selections,
    today: NaiveDate,
) -> Vec<&'a LlmEntry> {
    apply(
        dataset,
        &selections.license,
        &selections.size,
        &selections.time,
        today,
    )
}

/// Positions of matching entries within `dataset`.
pub fn matching_indices(
    dataset: &[LlmEntry],
    selections: &Selections,
    today: NaiveDate,
) -> Vec<usize> {
    dataset
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            matches(
                entry,
                &selections.license,
                &selections.size,
                &selections.time,
                today,
            )
        })
        .map(|(i, _)| i)
        .collect()
}

fn matches(
    entry: &LlmEntry,
    license: &SelectionSet,
    size: &SelectionSet,
    time: &SelectionSet,
    today: NaiveDate,
) -> bool {
    license_matches(entry, license)
        && size_matches(entry, size)
        && time_matches(entry, time, today)
}

pub fn license_matches(entry: &LlmEntry, selection: &SelectionSet) -> bool {
    if selection.is_empty() {
        return true;
    }
    let license = entry.license.as_str();
    selection.iter().any(|option| {
        let name = option.name();
        name == license
            || (name == APACHE_BUCKET && license.contains(APACHE_BUCKET))
            || (name == CUSTOM_BUCKET && license.contains(CUSTOM_BUCKET))
    })
}

pub fn size_matches(entry: &LlmEntry, selection: &SelectionSet) -> bool {
    if selection.is_empty() {
        return true;
    }
    let Some(size) = entry.parameters else {
        return false;
    };
    selection
        .iter()
        .filter_map(|option| SizeBucket::from_name(option.name()))
        .any(|bucket| bucket.contains(size))
}

/// A session holds at most one window. Sets with several windows, built in
/// multiple mode, match when any known window contains the release.
pub fn time_matches(entry: &LlmEntry, selection: &SelectionSet, today: NaiveDate) -> bool {
    if selection.is_empty() {
        return true;
    }
    let Some(released) = entry.released else {
        return false;
    };
    selection.iter().any(|option| match TimeWindow::from_name(option.name()) {
        Some(window) => window.contains(released, today),
        None => {
            tracing::debug!("Unknown time window '{}' matches nothing", option.name());
            false
        }
    })
}

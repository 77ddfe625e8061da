//! Selection persistence
//!
//! Encodes a selection set as a versioned list of option names:
//!
//! ```json
//! {"version":1,"names":["Apache","MIT"]}
//! ```
//!
//! Decoding never fails. Empty, unreadable or unknown-version blobs come back
//! as an empty set. A bare JSON array of names is also accepted.

use crate::filter::SelectionSet;
use crate::types::SelectionMode;
use serde::{Deserialize, Serialize};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct BlobRef<'a> {
    version: u32,
    names: Vec<&'a str>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBlob {
    Versioned { version: u32, names: Vec<String> },
    Bare(Vec<String>),
}

/// Encode a selection set. Names are written in sorted order.
pub fn save(selection: &SelectionSet) -> Vec<u8> {
    let blob = BlobRef {
        version: FORMAT_VERSION,
        names: selection.sorted_names(),
    };
    // Serializing a struct of strings into memory cannot fail.
    serde_json::to_vec(&blob).unwrap_or_default()
}

/// Decode a selection set, falling back to an empty one.
pub fn load(bytes: &[u8], mode: SelectionMode) -> SelectionSet {
    match decode(bytes) {
        Some(names) => SelectionSet::from_names(mode, names),
        None => SelectionSet::new(mode),
    }
}

fn decode(bytes: &[u8]) -> Option<Vec<String>> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return None;
    }

    let names = match serde_json::from_slice::<StoredBlob>(bytes) {
        Ok(StoredBlob::Versioned { version, names }) if version == FORMAT_VERSION => names,
        Ok(StoredBlob::Versioned { version, .. }) => {
            tracing::warn!("Unsupported selection format version {}, starting empty", version);
            return None;
        }
        Ok(StoredBlob::Bare(names)) => names,
        Err(e) => {
            tracing::warn!("Failed to decode persisted selection, starting empty: {}", e);
            return None;
        }
    };

    Some(names.into_iter().filter(|n| !n.trim().is_empty()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FilterOption;

    fn multi(names: &[&str]) -> SelectionSet {
        SelectionSet::from_names(SelectionMode::Multiple, names.iter().copied())
    }

    #[test]
    fn test_round_trip() {
        let original = multi(&["Apache", "MIT", "Custom"]);
        let loaded = load(&save(&original), SelectionMode::Multiple);
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_round_trip_generated_sets() {
        let pool = [
            "Apache",
            "Custom with Usage Restrictions",
            "Apache 2.0, CC BY-SA-3.0",
            "say \"open\"",
            "back\\slash",
            "Llama 3 ライセンス",
            "Größe < 5B",
            "emoji 🦙",
        ];

        for mask in 0u32..(1 << pool.len()) {
            let names: Vec<&str> = pool
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, name)| *name)
                .collect();
            // every chosen name twice
            let doubled = names.iter().chain(names.iter()).copied();
            let original = SelectionSet::from_names(SelectionMode::Multiple, doubled);
            assert_eq!(original.len(), names.len());

            let loaded = load(&save(&original), SelectionMode::Multiple);
            assert_eq!(loaded, original, "names {:?}", names);
        }
    }

    #[test]
    fn test_round_trip_empty() {
        let original = multi(&[]);
        let bytes = save(&original);
        assert!(!bytes.is_empty());
        assert_eq!(load(&bytes, SelectionMode::Multiple), original);
    }

    #[test]
    fn test_round_trip_single() {
        let mut original = SelectionSet::single();
        original.select(FilterOption::new("Previous Year"));
        assert_eq!(load(&save(&original), SelectionMode::Single), original);
    }

    #[test]
    fn test_save_is_deterministic() {
        let a = save(&multi(&["b", "a", "c"]));
        let b = save(&multi(&["c", "b", "a"]));
        assert_eq!(a, b);
        assert_eq!(
            String::from_utf8(a).unwrap(),
            r#"{"version":1,"names":["a","b","c"]}"#
        );
    }

    #[test]
    fn test_empty_and_missing_blob() {
        assert!(load(b"", SelectionMode::Multiple).is_empty());
        assert!(load(b"  \n", SelectionMode::Multiple).is_empty());
    }

    #[test]
    fn test_malformed_blob_is_empty() {
        assert!(load(b"{not json", SelectionMode::Multiple).is_empty());
        assert!(load(&[0xff, 0xfe, 0x00], SelectionMode::Multiple).is_empty());
        assert!(load(br#"{"names": 3}"#, SelectionMode::Multiple).is_empty());
        assert!(load(br#""Apache""#, SelectionMode::Multiple).is_empty());
    }

    #[test]
    fn test_unknown_version_is_empty() {
        let blob = br#"{"version":99,"names":["Apache"]}"#;
        assert!(load(blob, SelectionMode::Multiple).is_empty());
    }

    #[test]
    fn test_bare_array_accepted() {
        let loaded = load(br#"["Small < 5B","Large > 5B"]"#, SelectionMode::Multiple);
        assert_eq!(loaded, multi(&["Large > 5B", "Small < 5B"]));
    }

    #[test]
    fn test_single_slot_keeps_first_name() {
        let loaded = load(br#"["Past 2 Years","Last 6 Months"]"#, SelectionMode::Single);
        assert_eq!(loaded.sorted_names(), vec!["Past 2 Years"]);
    }

    #[test]
    fn test_blank_names_dropped() {
        let loaded = load(br#"{"version":1,"names":["", "MIT", "  "]}"#, SelectionMode::Multiple);
        assert_eq!(loaded, multi(&["MIT"]));
    }
}

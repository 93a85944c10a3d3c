//! The category/year/release index document and id propagation.
//!
//! The index is a single JSON file listing every category, its years, and
//! the releases under each year. Indexed releases carry the canonical
//! `uniqueId` for their release file; the propagation pass pushes those ids
//! down into the referenced files, restoring the declared top-level key
//! order and keeping each file's own indentation style.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ids::new_unique_id;
use crate::json::{self, JsonError};
use crate::naming;

// ── Index document ──────────────────────────────────────────────────────────

/// One category entry in the index (e.g., "baseball").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryIndex {
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub years: Vec<YearIndex>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One year under a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearIndex {
    pub year: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub releases: Vec<ReleaseIndex>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One release entry under a year. Only indexed entries reference an actual
/// release file on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseIndex {
    pub name: String,
    #[serde(default)]
    pub indexed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Read the index document.
pub fn read_index(path: &Path) -> Result<Vec<CategoryIndex>, JsonError> {
    let contents = std::fs::read_to_string(path).map_err(|e| JsonError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| JsonError::parse(path, e))
}

/// Fill a fresh `uniqueId` on every indexed release entry that lacks one.
/// Returns the number of ids added.
pub fn assign_missing_index_ids(index: &mut [CategoryIndex]) -> usize {
    let mut added = 0;
    for category in index.iter_mut() {
        for year in &mut category.years {
            for release in &mut year.releases {
                if release.indexed && release.unique_id.is_none() {
                    release.unique_id = Some(new_unique_id());
                    added += 1;
                }
            }
        }
    }
    added
}

/// Fill missing ids in an index file on disk, rewriting it in place with its
/// own indentation style when anything changed.
pub fn assign_index_ids_in_file(path: &Path) -> Result<usize, JsonError> {
    let contents = std::fs::read_to_string(path).map_err(|e| JsonError::io(path, e))?;
    let mut index: Vec<CategoryIndex> =
        serde_json::from_str(&contents).map_err(|e| JsonError::parse(path, e))?;

    let added = assign_missing_index_ids(&mut index);
    if added > 0 {
        json::write_pretty(path, &index, &json::detect_indent(&contents))?;
    }
    Ok(added)
}

// ── Propagation ─────────────────────────────────────────────────────────────

/// Outcome of an id-propagation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PropagateStats {
    /// Release files rewritten with the index's id.
    pub updated: usize,
    /// Index entries with no file work to do (not indexed, or no id/name).
    pub skipped: usize,
    /// Referenced files that could not be read or written.
    pub failed: usize,
}

/// Push every indexed release's `uniqueId` from the index into the
/// referenced release file, relative to the index file's directory.
///
/// Each target file is loaded as an order-preserving document, its top-level
/// keys are restored to the declared order with the id injected, and it is
/// rewritten with its own detected indentation. Unreadable targets are
/// logged and counted as failures; the pass continues.
pub fn propagate_release_ids(index_path: &Path) -> Result<PropagateStats, JsonError> {
    let index = read_index(index_path)?;
    let base_dir = index_path.parent().unwrap_or_else(|| Path::new("."));

    let mut stats = PropagateStats::default();
    for category in &index {
        for year in &category.years {
            for release in &year.releases {
                if !release.indexed {
                    stats.skipped += 1;
                    continue;
                }
                let Some(unique_id) = release.unique_id.as_deref() else {
                    stats.skipped += 1;
                    continue;
                };

                let path = naming::release_file_path(
                    base_dir,
                    &category.category,
                    &year.year,
                    &release.name,
                );
                match propagate_into_file(&path, unique_id) {
                    Ok(()) => {
                        log::info!("Updated {} with uniqueId {}", path.display(), unique_id);
                        stats.updated += 1;
                    }
                    Err(e) => {
                        log::error!("{e}");
                        stats.failed += 1;
                    }
                }
            }
        }
    }
    Ok(stats)
}

fn propagate_into_file(path: &Path, unique_id: &str) -> Result<(), JsonError> {
    let (value, indent) = json::read_release_value(path)?;
    let Some(map) = value.as_object() else {
        return Err(JsonError::parse(
            path,
            serde::de::Error::custom("release document must be an object"),
        ));
    };
    let reordered = reorder_release_keys(map, unique_id);
    json::write_pretty(path, &serde_json::Value::Object(reordered), &indent)
}

/// Declared order of the top-level release keys.
const DECLARED_KEY_ORDER: &[&str] = &[
    "$schema",
    "name",
    "version",
    "uniqueId",
    "attributes",
    "notes",
    "sets",
];

/// Rebuild a release's top-level map in the declared key order with
/// `uniqueId` set to the given value. Keys outside the declared list keep
/// their original relative order and are appended after.
pub fn reorder_release_keys(
    map: &serde_json::Map<String, serde_json::Value>,
    unique_id: &str,
) -> serde_json::Map<String, serde_json::Value> {
    let mut out = serde_json::Map::new();
    for &key in DECLARED_KEY_ORDER {
        if key == "uniqueId" {
            out.insert(
                key.to_string(),
                serde_json::Value::String(unique_id.to_string()),
            );
        } else if let Some(value) = map.get(key) {
            out.insert(key.to_string(), value.clone());
        }
    }
    for (key, value) in map {
        if !out.contains_key(key) {
            out.insert(key.clone(), value.clone());
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;

//! Unique-identifier generation and assignment.
//!
//! Every materialized `uniqueId` is an opaque UUID string. The assignment
//! pass fills identifiers that older hand-edited files lack, leaving
//! existing ones untouched.

use std::path::Path;

use crate::json::{self, JsonError};
use crate::types::Release;

/// Generate a fresh opaque identifier.
pub fn new_unique_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Counts of identifiers added by an assignment pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AssignStats {
    pub sets: usize,
    pub cards: usize,
}

impl AssignStats {
    pub fn total(&self) -> usize {
        self.sets + self.cards
    }
}

/// Fill missing `uniqueId`s on every set and card of a release.
pub fn assign_missing_ids(release: &mut Release) -> AssignStats {
    let mut stats = AssignStats::default();
    for set in &mut release.sets {
        if set.unique_id.is_none() {
            set.unique_id = Some(new_unique_id());
            stats.sets += 1;
        }
        for card in &mut set.cards {
            if card.unique_id.is_none() {
                card.unique_id = Some(new_unique_id());
                stats.cards += 1;
            }
        }
    }
    stats
}

/// Fill missing ids in a release file on disk, rewriting it in place with
/// its own indentation style. Returns the counts of ids added; a file that
/// already has every id is left untouched.
pub fn assign_ids_in_file(path: &Path) -> Result<AssignStats, JsonError> {
    let contents = std::fs::read_to_string(path).map_err(|e| JsonError::io(path, e))?;
    let mut release: Release =
        serde_json::from_str(&contents).map_err(|e| JsonError::parse(path, e))?;

    let stats = assign_missing_ids(&mut release);
    if stats.total() > 0 {
        json::write_release(path, &release, &json::detect_indent(&contents))?;
    }
    Ok(stats)
}

//! Pre-write integrity checks over the flattened table.
//!
//! Run after all releases are collected and before anything is written: a
//! violation fails the entire export with no output.

use std::collections::BTreeMap;

use crate::flatten::{FlatRecord, RecordKind};

/// A set identity claimed by more than one set name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNameConflict {
    pub unique_id: String,
    pub names: Vec<String>,
}

/// Everything the integrity pass found.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IntegrityReport {
    pub set_conflicts: Vec<SetNameConflict>,
    /// Card identities appearing on more than one base record.
    pub duplicate_card_ids: Vec<String>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.set_conflicts.is_empty() && self.duplicate_card_ids.is_empty()
    }
}

impl std::fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for conflict in &self.set_conflicts {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(
                f,
                "set uniqueId '{}' maps to multiple names: {}",
                conflict.unique_id,
                conflict.names.join(", ")
            )?;
        }
        for id in &self.duplicate_card_ids {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "card uniqueId '{id}' appears on more than one base record")?;
        }
        Ok(())
    }
}

/// Check the flattened table's base records for identity violations.
///
/// Only materialized set identities participate: a set with no `uniqueId`
/// contributes an empty id and is skipped rather than colliding with every
/// other id-less set.
pub fn check_integrity(records: &[FlatRecord]) -> IntegrityReport {
    let mut set_names: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    let mut card_counts: BTreeMap<&str, usize> = BTreeMap::new();

    for record in records {
        if record.kind != RecordKind::Base {
            continue;
        }
        if !record.set_unique_id.is_empty() {
            let names = set_names.entry(record.set_unique_id.as_str()).or_default();
            if !names.contains(&record.set_name.as_str()) {
                names.push(record.set_name.as_str());
            }
        }
        *card_counts.entry(record.card_unique_id.as_str()).or_default() += 1;
    }

    IntegrityReport {
        set_conflicts: set_names
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(unique_id, names)| SetNameConflict {
                unique_id: unique_id.to_string(),
                names: names.into_iter().map(|n| n.to_string()).collect(),
            })
            .collect(),
        duplicate_card_ids: card_counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, _)| id.to_string())
            .collect(),
    }
}

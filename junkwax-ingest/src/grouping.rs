//! Row grouping: deciding which checklist rows form a base set and which
//! are parallels of it.
//!
//! Two modes exist. Explicit mode is used when the checklist carries a
//! `PARALLEL OF` column: each row names its own base set and grouping is a
//! straight partition. Implicit mode infers structure from row order and
//! label prefixes: a row whose label extends the current base label by one
//! space is a parallel of it, anything else opens a new group. A final
//! implicit-mode pass merges an adjacent group into its predecessor when
//! both list exactly the same (number, name) base cards — those are
//! full-set parallels whose labels don't share the base prefix.

use std::collections::BTreeSet;

use crate::checklist::{Checklist, ChecklistRow};

/// One detected group: the base rows of a set plus its parallel rows.
#[derive(Debug, Clone)]
pub struct RowGroup {
    /// The base set label (first occurrence, trimmed).
    pub base_label: String,
    /// Rows whose label equals the base label.
    pub base_rows: Vec<ChecklistRow>,
    /// Parallel rows, each with its derived parallel name.
    pub parallel_rows: Vec<(ChecklistRow, String)>,
}

impl RowGroup {
    fn new(base_label: String) -> Self {
        RowGroup {
            base_label,
            base_rows: Vec::new(),
            parallel_rows: Vec::new(),
        }
    }

    /// The set of (card number, card name) keys among this group's base rows.
    fn base_keys(&self) -> BTreeSet<(&str, &str)> {
        self.base_rows
            .iter()
            .map(|r| (r.card_number.as_str(), r.card_name.as_str()))
            .collect()
    }
}

/// Group a checklist's rows, dispatching on the grouping mode.
pub fn group_rows(checklist: &Checklist) -> Vec<RowGroup> {
    if checklist.explicit_parallels {
        group_explicit(&checklist.rows)
    } else {
        group_implicit(&checklist.rows)
    }
}

/// Derive a parallel name from a row label relative to its base label:
/// strip the base prefix and one following space, then trim spaces and
/// hyphens. Falls back to the raw label when the prefix does not match.
pub fn parallel_name(label: &str, base: &str) -> String {
    match label
        .strip_prefix(base)
        .and_then(|rest| rest.strip_prefix(' '))
    {
        Some(rest) => rest.trim_matches(|c: char| c == ' ' || c == '-').to_string(),
        None => label.to_string(),
    }
}

// ── Explicit mode ───────────────────────────────────────────────────────────

fn group_explicit(rows: &[ChecklistRow]) -> Vec<RowGroup> {
    let mut groups: Vec<RowGroup> = Vec::new();

    for row in rows {
        let effective_base = row
            .parallel_of
            .as_deref()
            .unwrap_or(row.set_label.as_str())
            .to_string();

        let idx = match groups.iter().position(|g| g.base_label == effective_base) {
            Some(i) => i,
            None => {
                groups.push(RowGroup::new(effective_base));
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];

        if row.set_label == group.base_label {
            group.base_rows.push(row.clone());
        } else {
            let name = parallel_name(&row.set_label, &group.base_label);
            group.parallel_rows.push((row.clone(), name));
        }
    }

    groups
}

// ── Implicit mode ───────────────────────────────────────────────────────────

fn group_implicit(rows: &[ChecklistRow]) -> Vec<RowGroup> {
    let mut groups: Vec<RowGroup> = Vec::new();

    // Only the newest group is ever open; a non-matching label closes it.
    for row in rows {
        let continued = match groups.last_mut() {
            Some(group) if row.set_label == group.base_label => {
                group.base_rows.push(row.clone());
                true
            }
            Some(group)
                if row
                    .set_label
                    .strip_prefix(group.base_label.as_str())
                    .is_some_and(|rest| rest.starts_with(' ')) =>
            {
                let name = parallel_name(&row.set_label, &group.base_label);
                group.parallel_rows.push((row.clone(), name));
                true
            }
            _ => false,
        };

        if !continued {
            let mut group = RowGroup::new(row.set_label.clone());
            group.base_rows.push(row.clone());
            groups.push(group);
        }
    }

    merge_adjacent_full_parallels(groups)
}

/// Merge an adjacent group into its predecessor when both hold exactly the
/// same set of (number, name) base cards: the later group's rows all become
/// parallels of the earlier one, named by their own raw set label.
///
/// Key-set equality is the only guard; two unrelated adjacent sets that
/// happen to share an identical checklist would merge silently.
fn merge_adjacent_full_parallels(groups: Vec<RowGroup>) -> Vec<RowGroup> {
    let mut merged: Vec<RowGroup> = Vec::new();

    for group in groups {
        if let Some(prev) = merged.last_mut() {
            if !group.base_rows.is_empty() && prev.base_keys() == group.base_keys() {
                for row in group.base_rows {
                    let name = row.set_label.clone();
                    prev.parallel_rows.push((row, name));
                }
                for (row, _) in group.parallel_rows {
                    let name = row.set_label.clone();
                    prev.parallel_rows.push((row, name));
                }
                continue;
            }
        }
        merged.push(group);
    }

    merged
}

#[cfg(test)]
#[path = "tests/grouping_tests.rs"]
mod tests;

//! Flattening: one denormalized record per (card, parallel-or-variation-
//! or-none) combination.
//!
//! Every synthesized record carries a durable identity and a parent link.
//! A base record's parent is empty; a parallel's parent is its base card; a
//! variation's parent is its base card; a variation-parallel's parent is
//! the variation — never deeper than two levels.

use junkwax_catalog::ids::new_unique_id;
use junkwax_catalog::types::{Card, CardSet, Release};

/// Which emission step produced a record. In-memory bookkeeping only —
/// stripped before the table is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Base,
    Parallel,
    Variation,
    VariationParallel,
}

/// One flattened record.
#[derive(Debug, Clone)]
pub struct FlatRecord {
    pub kind: RecordKind,
    pub category: String,
    pub release_unique_id: String,
    pub year: String,
    /// Release label from the filename (e.g., "Topps").
    pub release: String,
    /// Release display name from the file (e.g., "1990 Topps Baseball").
    pub release_name: String,
    pub set_unique_id: String,
    pub set_name: String,
    pub card_unique_id: String,
    /// Identity of the record this one was synthesized from; empty for base
    /// records.
    pub card_parent_unique_id: String,
    pub card_number: String,
    pub card_name: String,
    pub attributes: Vec<String>,
    pub note: String,
    pub parallel: String,
    pub numbered_to: Option<u32>,
    pub insert_odds: Option<String>,
}

/// File-location metadata for one release being flattened.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseContext<'a> {
    pub category: &'a str,
    pub year: &'a str,
    pub label: &'a str,
}

/// Flatten one release into records, in traversal order.
pub fn flatten_release(ctx: &ReleaseContext<'_>, release: &Release) -> Vec<FlatRecord> {
    let mut records = Vec::new();
    for set in &release.sets {
        for card in &set.cards {
            flatten_card(ctx, release, set, card, &mut records);
        }
    }
    records
}

fn flatten_card(
    ctx: &ReleaseContext<'_>,
    release: &Release,
    set: &CardSet,
    card: &Card,
    records: &mut Vec<FlatRecord>,
) {
    let base = FlatRecord {
        kind: RecordKind::Base,
        category: ctx.category.to_string(),
        release_unique_id: release.unique_id.clone().unwrap_or_default(),
        year: ctx.year.to_string(),
        release: ctx.label.to_string(),
        release_name: release.name.clone(),
        set_unique_id: set.unique_id.clone().unwrap_or_default(),
        set_name: set.name.clone(),
        card_unique_id: card.unique_id.clone().unwrap_or_else(new_unique_id),
        card_parent_unique_id: String::new(),
        card_number: card.number.clone().unwrap_or_default(),
        card_name: card.name.clone(),
        attributes: union(&set.attributes, &card.attributes),
        note: card.note.clone().unwrap_or_default(),
        parallel: String::new(),
        numbered_to: card.numbered_to.or(set.numbered_to),
        insert_odds: card.insert_odds.clone().or_else(|| set.insert_odds.clone()),
    };
    records.push(base.clone());

    // One record per parallel, card-level entries before the set-wide ones.
    for parallel in card.parallels.iter().chain(&set.parallels) {
        let mut record = base.clone();
        record.kind = RecordKind::Parallel;
        record.card_unique_id = new_unique_id();
        record.card_parent_unique_id = base.card_unique_id.clone();
        record.parallel = parallel.name.clone();
        if let Some(numbered_to) = parallel.numbered_to {
            record.numbered_to = Some(numbered_to);
        }
        if let Some(insert_odds) = &parallel.insert_odds {
            record.insert_odds = Some(insert_odds.clone());
        }
        records.push(record);
    }

    for variation in &card.variations {
        let mut record = base.clone();
        record.kind = RecordKind::Variation;
        record.card_unique_id = new_unique_id();
        record.card_parent_unique_id = base.card_unique_id.clone();
        record.card_name = if variation.variation.is_empty() {
            card.name.clone()
        } else {
            format!("{} ({})", card.name, variation.variation)
        };
        record.attributes = union(&record.attributes, &variation.attributes);
        if !record.attributes.iter().any(|a| a == "VAR") {
            record.attributes.push("VAR".to_string());
        }
        if let Some(note) = &variation.note {
            record.note = note.clone();
        }
        if let Some(numbered_to) = variation.numbered_to {
            record.numbered_to = Some(numbered_to);
        }
        if let Some(insert_odds) = &variation.insert_odds {
            record.insert_odds = Some(insert_odds.clone());
        }
        let variation_record = record.clone();
        records.push(record);

        for parallel in variation.parallels.iter().chain(&set.parallels) {
            let mut record = variation_record.clone();
            record.kind = RecordKind::VariationParallel;
            record.card_unique_id = new_unique_id();
            record.card_parent_unique_id = variation_record.card_unique_id.clone();
            record.parallel = parallel.name.clone();
            if let Some(numbered_to) = parallel.numbered_to {
                record.numbered_to = Some(numbered_to);
            }
            if let Some(insert_odds) = &parallel.insert_odds {
                record.insert_odds = Some(insert_odds.clone());
            }
            records.push(record);
        }
    }
}

/// Order-preserving union of two attribute lists.
fn union(first: &[String], second: &[String]) -> Vec<String> {
    let mut out: Vec<String> = first.to_vec();
    for attr in second {
        if !out.contains(attr) {
            out.push(attr.clone());
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/flatten_tests.rs"]
mod tests;

//! Release assembly: turn detected row groups into the typed catalog model.
//!
//! Follows the checklist conventions: a uniform print run across all base
//! rows is promoted to the set, a parallel covering every base card number
//! is recorded once at the set level, and a parallel row with no matching
//! base card synthesizes a card noted "No Base Set Version".

use std::collections::BTreeSet;

use junkwax_catalog::ids::new_unique_id;
use junkwax_catalog::types::{Card, CardSet, Parallel, Release};

use crate::checklist::{Checklist, ChecklistRow};
use crate::grouping::{self, RowGroup};
use crate::rules::{self, AttributeRule};

/// Schema URI stamped on every ingested release file.
pub const RELEASE_SCHEMA_URI: &str =
    "https://raw.githubusercontent.com/JunkWaxData/CardLists/refs/heads/main/schemas/release.json";

/// Counters and data-quality warnings from one ingest run.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub sets: usize,
    pub cards: usize,
    pub set_parallels: usize,
    pub card_parallels: usize,
    /// Cards synthesized for parallel rows with no base counterpart.
    pub synthesized_cards: usize,
    /// Duplicate (number, name) base rows collapsed to their first occurrence.
    pub duplicates_dropped: usize,
    pub warnings: Vec<String>,
}

/// Build a release from a parsed checklist.
pub fn build_release(checklist: &Checklist, rules: &[AttributeRule]) -> (Release, IngestReport) {
    let mut report = IngestReport::default();

    let groups = grouping::group_rows(checklist);
    let sets: Vec<CardSet> = groups
        .iter()
        .map(|group| build_set(group, rules, &mut report))
        .collect();

    // Dictionary entries for every code the rule set attached, so the
    // output is closed: used codes ↔ root definitions.
    let mut used_codes: Vec<String> = Vec::new();
    for set in &sets {
        for card in &set.cards {
            for code in &card.attributes {
                if !used_codes.contains(code) {
                    used_codes.push(code.clone());
                }
            }
        }
    }
    let attributes = rules::definitions_for(&used_codes, rules);

    report.sets = sets.len();
    report.cards = sets.iter().map(|s| s.cards.len()).sum();
    report.set_parallels = sets.iter().map(|s| s.parallels.len()).sum();
    report.card_parallels = sets
        .iter()
        .flat_map(|s| &s.cards)
        .map(|c| c.parallels.len())
        .sum();

    let release = Release {
        schema: Some(RELEASE_SCHEMA_URI.to_string()),
        name: checklist.release_name(),
        version: Some("1.0".to_string()),
        unique_id: Some(new_unique_id()),
        attributes,
        sets,
        ..Default::default()
    };

    (release, report)
}

fn build_set(group: &RowGroup, rules: &[AttributeRule], report: &mut IngestReport) -> CardSet {
    let set_attributes = rules::infer_attributes(&group.base_label, rules);

    // Base cards, with duplicate (number, name) rows collapsed.
    let mut cards: Vec<Card> = Vec::new();
    let mut sequences: Vec<Option<u32>> = Vec::new();
    let mut seen: BTreeSet<(String, String)> = BTreeSet::new();
    let mut base_numbers: BTreeSet<String> = BTreeSet::new();

    for row in &group.base_rows {
        let key = (row.card_number.clone(), row.card_name.clone());
        if !seen.insert(key) {
            let warning = format!(
                "Duplicate card {} '{}' dropped in set '{}'",
                row.card_number, row.card_name, group.base_label
            );
            log::warn!("{warning}");
            report.warnings.push(warning);
            report.duplicates_dropped += 1;
            continue;
        }
        base_numbers.insert(row.card_number.clone());

        cards.push(Card {
            unique_id: Some(row.unique_id.clone().unwrap_or_else(new_unique_id)),
            number: Some(row.card_number.clone()),
            name: row.card_name.clone(),
            attributes: set_attributes.clone(),
            ..Default::default()
        });
        sequences.push(row.sequence);
    }

    // A print run shared by every base card is promoted to the set.
    let promoted_numbered_to = uniform_sequence(&sequences);
    if promoted_numbered_to.is_none() {
        for (card, sequence) in cards.iter_mut().zip(&sequences) {
            card.numbered_to = *sequence;
        }
    }

    // Parallel rows, grouped by parallel name in first-appearance order.
    let mut by_name: Vec<(String, Vec<&ChecklistRow>)> = Vec::new();
    for (row, name) in &group.parallel_rows {
        match by_name.iter_mut().find(|(n, _)| n == name) {
            Some((_, rows)) => rows.push(row),
            None => by_name.push((name.clone(), vec![row])),
        }
    }

    let mut set_parallels: Vec<Parallel> = Vec::new();
    for (name, rows) in &by_name {
        let covered: BTreeSet<String> = rows.iter().map(|r| r.card_number.clone()).collect();

        if covered == base_numbers && !base_numbers.is_empty() {
            // Complete parallel: recorded once at the set level.
            let runs: Vec<Option<u32>> = rows.iter().map(|r| r.sequence).collect();
            set_parallels.push(Parallel {
                name: name.clone(),
                numbered_to: uniform_sequence(&runs),
                ..Default::default()
            });
            continue;
        }

        // Partial parallel: attach each row to its base card by number,
        // synthesizing a card when none exists.
        for row in rows {
            let parallel = Parallel {
                name: name.clone(),
                numbered_to: row.sequence,
                ..Default::default()
            };
            match cards
                .iter_mut()
                .find(|c| c.number.as_deref() == Some(row.card_number.as_str()))
            {
                Some(card) => card.parallels.push(parallel),
                None => {
                    cards.push(Card {
                        unique_id: Some(row.unique_id.clone().unwrap_or_else(new_unique_id)),
                        number: Some(row.card_number.clone()),
                        name: row.card_name.clone(),
                        attributes: set_attributes.clone(),
                        note: Some("No Base Set Version".to_string()),
                        numbered_to: row.sequence,
                        parallels: vec![parallel],
                        ..Default::default()
                    });
                    base_numbers.insert(row.card_number.clone());
                    report.synthesized_cards += 1;
                }
            }
        }
    }

    CardSet {
        name: group.base_label.clone(),
        unique_id: Some(new_unique_id()),
        numbered_to: promoted_numbered_to,
        parallels: set_parallels,
        cards,
        ..Default::default()
    }
}

/// The single value shared by every entry, when all entries carry one.
fn uniform_sequence(sequences: &[Option<u32>]) -> Option<u32> {
    let mut iter = sequences.iter();
    let first = (*iter.next()?)?;
    for sequence in iter {
        if *sequence != Some(first) {
            return None;
        }
    }
    Some(first)
}

#[cfg(test)]
#[path = "tests/assemble_tests.rs"]
mod tests;

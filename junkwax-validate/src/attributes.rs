//! Attribute-dictionary consistency checks.
//!
//! Per file, attribute usage and the root dictionary must form a closed
//! bidirectional mapping: every code used on a card (or nested variation)
//! is defined at the root, and every root definition is used somewhere.
//! Across a corpus, one code must carry one identical note everywhere.
//! A missing definition gets a suggested entry, reusing the corpus's
//! canonical definition when one exists.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use junkwax_catalog::AttributeDefinition;
use serde_json::Value;

/// Placeholder note suggested for codes the corpus has never defined.
pub const UNDEFINED_NOTE: &str = "NEW ATTRIBUTE - please define";

// ── Corpus ──────────────────────────────────────────────────────────────────

/// Aggregated root definitions across every file of a corpus:
/// attribute → note → number of files defining it that way.
#[derive(Debug, Default)]
pub struct AttributeCorpus {
    defs: BTreeMap<String, BTreeMap<String, usize>>,
}

impl AttributeCorpus {
    /// Collect root definitions from every readable file. Unreadable or
    /// unparseable files are skipped here — they are reported by the
    /// per-file pass instead.
    pub fn collect(files: &[PathBuf]) -> Self {
        let mut corpus = AttributeCorpus::default();
        for path in files {
            let Ok(contents) = std::fs::read_to_string(path) else {
                continue;
            };
            let Ok(value) = serde_json::from_str::<Value>(&contents) else {
                continue;
            };
            corpus.add_document(&value);
        }
        corpus
    }

    fn add_document(&mut self, doc: &Value) {
        for (attribute, note) in root_definitions(doc) {
            *self
                .defs
                .entry(attribute)
                .or_default()
                .entry(note)
                .or_default() += 1;
        }
    }

    /// The corpus-wide definition of a code, when every file agrees on it.
    pub fn canonical(&self, attribute: &str) -> Option<AttributeDefinition> {
        let notes = self.defs.get(attribute)?;
        if notes.len() != 1 {
            return None;
        }
        notes.keys().next().map(|note| AttributeDefinition {
            attribute: attribute.to_string(),
            note: note.clone(),
        })
    }

    /// A suggested definition for a code missing from some file's root:
    /// the canonical definition if consistent, else the most frequent note,
    /// else a placeholder.
    pub fn suggest(&self, attribute: &str) -> AttributeDefinition {
        if let Some(canonical) = self.canonical(attribute) {
            return canonical;
        }
        let best_note = self.defs.get(attribute).and_then(|notes| {
            notes
                .iter()
                .max_by_key(|(_, count)| **count)
                .map(|(note, _)| note.clone())
        });
        AttributeDefinition {
            attribute: attribute.to_string(),
            note: best_note.unwrap_or_else(|| UNDEFINED_NOTE.to_string()),
        }
    }

    /// Codes whose note text differs between files, with per-note counts.
    pub fn cross_file_findings(&self) -> Vec<CrossFileFinding> {
        self.defs
            .iter()
            .filter(|(_, notes)| notes.len() > 1)
            .map(|(attribute, notes)| CrossFileFinding {
                attribute: attribute.clone(),
                notes: notes
                    .iter()
                    .map(|(note, count)| (note.clone(), *count))
                    .collect(),
            })
            .collect()
    }
}

/// One code defined inconsistently across the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossFileFinding {
    pub attribute: String,
    /// Each distinct note with its occurrence count.
    pub notes: Vec<(String, usize)>,
}

impl std::fmt::Display for CrossFileFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts = self
            .notes
            .iter()
            .map(|(note, count)| format!("'{note}': {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Inconsistent note for attribute '{}': found differing notes with counts: {counts}",
            self.attribute
        )
    }
}

// ── Per-file validation ─────────────────────────────────────────────────────

/// Everything found while validating one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub errors: Vec<String>,
    /// Suggested dictionary entries for used-but-undefined codes.
    pub suggestions: Vec<AttributeDefinition>,
}

impl FileReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Validate one file's attribute usage against its own root dictionary,
/// consulting the corpus for suggestions. Never mutates the input.
pub fn validate_file(path: &Path, corpus: &AttributeCorpus) -> FileReport {
    let mut report = FileReport {
        path: path.to_path_buf(),
        errors: Vec::new(),
        suggestions: Vec::new(),
    };

    let doc = match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<Value>(&contents) {
            Ok(doc) => doc,
            Err(e) => {
                report.errors.push(format!("Failed to read JSON file: {e}"));
                return report;
            }
        },
        Err(e) => {
            report.errors.push(format!("Failed to read JSON file: {e}"));
            return report;
        }
    };

    // Root dictionary, with same-file conflict detection.
    let mut root_map: BTreeMap<String, String> = BTreeMap::new();
    if let Some(entries) = doc.get("attributes").and_then(|a| a.as_array()) {
        for entry in entries {
            match definition_pair(entry) {
                Some((attribute, note)) => match root_map.get(&attribute) {
                    Some(existing) if existing != &note => {
                        report.errors.push(format!(
                            "Attribute '{attribute}' defined with conflicting notes: \
                             '{existing}' and '{note}'."
                        ));
                    }
                    _ => {
                        root_map.insert(attribute, note);
                    }
                },
                None => {
                    report.errors.push(format!(
                        "Invalid attribute pair in root 'attributes' array: {entry}"
                    ));
                }
            }
        }
    }

    // Codes used on cards and nested variations.
    let mut used: BTreeSet<String> = BTreeSet::new();
    match doc.get("sets").and_then(|s| s.as_array()) {
        Some(sets) => {
            for set in sets {
                let set_name = set
                    .get("name")
                    .and_then(|n| n.as_str())
                    .unwrap_or("<unnamed>");
                match set.get("cards").and_then(|c| c.as_array()) {
                    Some(cards) => {
                        for card in cards {
                            collect_used_attributes(card, &mut used);
                        }
                    }
                    None => report
                        .errors
                        .push(format!("Set '{set_name}' is missing the 'cards' property.")),
                }
            }
        }
        None => {
            report
                .errors
                .push("Missing 'sets' property in JSON data.".to_string());
            return report;
        }
    }

    // Closed mapping, both directions.
    for attribute in &used {
        if !root_map.contains_key(attribute) {
            report.errors.push(format!(
                "Attribute '{attribute}' found on a card but not defined in root attributes."
            ));
            report.suggestions.push(corpus.suggest(attribute));
        }
    }
    for attribute in root_map.keys() {
        if !used.contains(attribute) {
            report.errors.push(format!(
                "Attribute '{attribute}' defined in root attributes but not found on any card."
            ));
        }
    }

    report
}

/// Collect attribute codes from a card or variation object, recursing into
/// nested variations.
fn collect_used_attributes(obj: &Value, used: &mut BTreeSet<String>) {
    let Some(map) = obj.as_object() else { return };

    if let Some(attrs) = map.get("attributes") {
        match attrs.as_array() {
            Some(entries) => {
                for entry in entries {
                    if let Some(code) = entry.as_str() {
                        used.insert(code.to_string());
                    }
                }
            }
            None => log::warn!("'attributes' is not a list in object: {obj}"),
        }
    }
    if let Some(variations) = map.get("variations") {
        match variations.as_array() {
            Some(entries) => {
                for variation in entries {
                    collect_used_attributes(variation, used);
                }
            }
            None => log::warn!("'variations' is not a list in object: {obj}"),
        }
    }
}

fn root_definitions(doc: &Value) -> Vec<(String, String)> {
    doc.get("attributes")
        .and_then(|a| a.as_array())
        .map(|entries| entries.iter().filter_map(definition_pair).collect())
        .unwrap_or_default()
}

fn definition_pair(entry: &Value) -> Option<(String, String)> {
    let map = entry.as_object()?;
    let attribute = map.get("attribute")?.as_str()?;
    let note = map.get("note")?.as_str()?;
    Some((attribute.to_string(), note.to_string()))
}

#[cfg(test)]
#[path = "tests/attributes_tests.rs"]
mod tests;

//! Attribute hoisting: move codes shared by every card of a set up to the
//! set's own attribute list.
//!
//! The file-level driver refuses to rewrite any document that fails the
//! structural checks, and re-checks the edited document before writing, so
//! a malformed file is never half-rewritten.

use std::path::Path;

use crate::json::{self, JsonError};
use crate::schema::{self, SchemaViolation};
use crate::types::{CardSet, Release};

/// Result of normalizing one release file.
#[derive(Debug)]
pub enum NormalizeOutcome {
    /// Nothing to hoist; the file was left untouched.
    Unchanged,
    /// The file was rewritten; count of sets that changed.
    Updated { sets_modified: usize },
    /// The document failed structural checks and was skipped.
    SchemaRejected(Vec<SchemaViolation>),
}

/// Hoist attributes common to all cards of each set. Returns the number of
/// sets modified.
pub fn hoist_common_attributes(release: &mut Release) -> usize {
    let mut modified = 0;
    for set in &mut release.sets {
        if hoist_set(set) {
            modified += 1;
        }
    }
    modified
}

fn hoist_set(set: &mut CardSet) -> bool {
    if set.cards.is_empty() {
        return false;
    }

    // A card with no attributes rules out any common code.
    let mut common: Vec<String> = match set.cards.first() {
        Some(first) if !first.attributes.is_empty() => first.attributes.clone(),
        _ => return false,
    };
    for card in &set.cards[1..] {
        if card.attributes.is_empty() {
            return false;
        }
        common.retain(|attr| card.attributes.contains(attr));
        if common.is_empty() {
            return false;
        }
    }
    common.sort();

    for attr in &common {
        if !set.attributes.contains(attr) {
            set.attributes.push(attr.clone());
        }
    }
    for card in &mut set.cards {
        card.attributes.retain(|attr| !common.contains(attr));
    }

    log::info!(
        "Moved {} common attribute(s) to set level in set '{}'",
        common.len(),
        set.name
    );
    true
}

/// Normalize one release file in place, preserving its indentation style.
pub fn normalize_file(path: &Path) -> Result<NormalizeOutcome, JsonError> {
    let (value, indent) = json::read_release_value(path)?;

    let violations = schema::check_release(&value);
    if !violations.is_empty() {
        return Ok(NormalizeOutcome::SchemaRejected(violations));
    }

    let mut release: Release =
        serde_json::from_value(value).map_err(|e| JsonError::parse(path, e))?;
    let sets_modified = hoist_common_attributes(&mut release);
    if sets_modified == 0 {
        return Ok(NormalizeOutcome::Unchanged);
    }

    // Re-check the edited document before replacing the file.
    let edited =
        serde_json::to_value(&release).map_err(|e| JsonError::serialize(path, e))?;
    let violations = schema::check_release(&edited);
    if !violations.is_empty() {
        return Ok(NormalizeOutcome::SchemaRejected(violations));
    }

    json::write_release(path, &release, &indent)?;
    Ok(NormalizeOutcome::Updated { sets_modified })
}

//! Data model types for the card catalog.
//!
//! These types represent the persistent release schema: releases, sets,
//! cards, variations, parallels, and the attribute dictionary. Field
//! declaration order fixes the serialized key order, so `Release` writes
//! `$schema`, `name`, `version`, `uniqueId`, `attributes`, `notes`, `sets`
//! with any unknown keys appended after.

use serde::{Deserialize, Serialize};

// ── Release ─────────────────────────────────────────────────────────────────

/// A release file: one year/brand product containing one or more sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    /// Schema URI reference carried at the top of every release file.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    /// The attribute dictionary: every code used on a card or variation in
    /// this file must be defined here exactly once.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sets: Vec<CardSet>,
    /// Unknown keys, preserved in original order for round-trips.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One entry of the release-level attribute dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Short code as used on cards (e.g., "AU", "RELIC").
    pub attribute: String,
    /// Human-readable description of the code.
    pub note: String,
}

// ── Set ─────────────────────────────────────────────────────────────────────

/// A named subset of cards within a release sharing print characteristics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Print run applying to every base card of the set that does not carry
    /// its own `numberedTo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbered_to: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_odds: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    /// Parallels that apply uniformly to every card in the set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parallels: Vec<Parallel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<Variation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<Card>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Card ────────────────────────────────────────────────────────────────────

/// A single card within a set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    /// Free-form card label — usually numeric but not necessarily
    /// (e.g., "T-12", "NNO").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbered_to: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_odds: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<Variation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parallels: Vec<Parallel>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Variation ───────────────────────────────────────────────────────────────

/// A named alternate version of a specific card (error, photo variant).
///
/// Variations are scoped to exactly one parent card and are never nested
/// deeper: a variation may carry parallels, but not further variations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    /// The variation label (e.g., "Error", "Glow Back").
    pub variation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbered_to: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_odds: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parallels: Vec<Parallel>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Parallel ────────────────────────────────────────────────────────────────

/// A print variant of its parent. Owned by exactly one of a card, a set,
/// or a variation; plain value type with no back-references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parallel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbered_to: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_odds: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Parallel {
    /// A parallel with only a name, as produced by checklist ingest when no
    /// print run is known.
    pub fn named(name: impl Into<String>) -> Self {
        Parallel {
            name: name.into(),
            ..Default::default()
        }
    }
}

//! Checklist ingest: infer the hierarchical catalog model from a flat
//! tabular checklist.
//!
//! The pipeline is checklist → row groups → release: `checklist` parses and
//! normalizes the CSV, `grouping` detects set/parallel boundaries from
//! label text, and `assemble` builds the typed `junkwax-catalog` model with
//! fresh identities.

pub mod assemble;
pub mod checklist;
pub mod error;
pub mod grouping;
pub mod rules;

pub use assemble::{IngestReport, RELEASE_SCHEMA_URI, build_release};
pub use checklist::{Checklist, ChecklistRow, parse_checklist, read_checklist};
pub use error::IngestError;
pub use grouping::{RowGroup, group_rows};
pub use rules::{AttributeRule, LabelPattern, default_rules, infer_attributes};

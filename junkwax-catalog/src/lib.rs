//! Card catalog data model, JSON I/O, and file-naming conventions.
//!
//! This crate defines the persistent data model for trading-card release
//! files without any CLI or output-format dependencies. Consumers use these
//! types directly for ingest (`junkwax-ingest`), validation
//! (`junkwax-validate`), and flattening (`junkwax-export`).

pub mod ids;
pub mod index;
pub mod json;
pub mod naming;
pub mod normalize;
pub mod schema;
pub mod types;

pub use ids::{AssignStats, assign_missing_ids, new_unique_id};
pub use index::{CategoryIndex, PropagateStats, ReleaseIndex, YearIndex, propagate_release_ids};
pub use json::{JsonError, detect_indent, find_release_files, read_release, write_release};
pub use normalize::{NormalizeOutcome, hoist_common_attributes, normalize_file};
pub use schema::{SchemaViolation, check_release};
pub use types::{AttributeDefinition, Card, CardSet, Parallel, Release, Variation};

//! Flattening export: walk a catalog tree, denormalize every release into
//! flat analytical records, and write one CSV table.
//!
//! The run is a single batch pass: collect all records in memory, run the
//! integrity checks, sort, write once. Unreadable or structurally invalid
//! files are logged and skipped; identity violations abort the run before
//! anything is written.

pub mod error;
pub mod flatten;
pub mod integrity;
pub mod table;
pub mod walk;

use std::path::Path;

use junkwax_catalog::schema;
use junkwax_catalog::types::Release;

pub use error::ExportError;
pub use flatten::{FlatRecord, RecordKind, ReleaseContext, flatten_release};
pub use integrity::{IntegrityReport, SetNameConflict, check_integrity};
pub use table::{sort_records, write_table};
pub use walk::{ReleaseFileRef, walk_categories};

/// Progress events for a long export walk.
#[derive(Debug, Clone)]
pub enum ExportProgress {
    Scanning,
    File {
        index: usize,
        total: usize,
        name: String,
    },
    Done,
}

/// Outcome of a completed export run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExportSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub records: usize,
}

/// Run the full export: walk, flatten, verify, sort, write.
pub fn run_export<F>(
    root: &Path,
    output: &Path,
    mut progress: F,
) -> Result<ExportSummary, ExportError>
where
    F: FnMut(ExportProgress),
{
    progress(ExportProgress::Scanning);
    let refs = walk_categories(root).map_err(|e| ExportError::io(root, e))?;
    let total = refs.len();

    let mut summary = ExportSummary::default();
    let mut records: Vec<FlatRecord> = Vec::new();

    for (index, file_ref) in refs.iter().enumerate() {
        progress(ExportProgress::File {
            index,
            total,
            name: file_ref
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("?")
                .to_string(),
        });

        match load_release(&file_ref.path) {
            Ok(release) => {
                let ctx = ReleaseContext {
                    category: &file_ref.category,
                    year: &file_ref.year,
                    label: &file_ref.label,
                };
                records.extend(flatten_release(&ctx, &release));
                summary.files_processed += 1;
            }
            Err(reason) => {
                log::error!("Skipping {}: {reason}", file_ref.path.display());
                summary.files_skipped += 1;
            }
        }
    }
    progress(ExportProgress::Done);

    let report = check_integrity(&records);
    if !report.is_clean() {
        return Err(ExportError::Integrity(report));
    }

    sort_records(&mut records);
    summary.records = records.len();
    write_table(output, &records)?;
    Ok(summary)
}

/// Read one release file, rejecting documents that fail the structural
/// checks. Returns a human-readable reason on failure so the caller can log
/// and continue.
fn load_release(path: &Path) -> Result<Release, String> {
    let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let value: serde_json::Value =
        serde_json::from_str(&contents).map_err(|e| e.to_string())?;

    let violations = schema::check_release(&value);
    if !violations.is_empty() {
        return Err(format!(
            "structural check failed ({}; {} total)",
            violations[0],
            violations.len()
        ));
    }

    serde_json::from_value(value).map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;

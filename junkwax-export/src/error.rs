use std::path::Path;

use thiserror::Error;

use crate::integrity::IntegrityReport;

/// Errors that fail an export run as a whole. Per-file read and schema
/// problems are logged and skipped instead (the run continues without that
/// file's records).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Integrity violation: {0}")]
    Integrity(IntegrityReport),
}

impl ExportError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

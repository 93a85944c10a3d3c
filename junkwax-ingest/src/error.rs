use std::path::Path;

use thiserror::Error;

/// Errors that can occur while reading or assembling a checklist.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Checklist is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Checklist contains no data rows")]
    Empty,
}

impl IngestError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }
}

use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Checklist ingest failed
    #[error("Ingest error: {0}")]
    Ingest(#[from] junkwax_ingest::IngestError),

    /// Release file I/O or (de)serialization failed
    #[error("{0}")]
    Catalog(#[from] junkwax_catalog::JsonError),

    /// Export run failed (including integrity violations)
    #[error("Export error: {0}")]
    Export(#[from] junkwax_export::ExportError),

    /// Validation run could not start
    #[error("{0}")]
    Validate(#[from] junkwax_validate::ValidateError),

    /// JSON rendering of a report block failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Command completed but found failures
    #[error("{0}")]
    Failed(String),
}

impl CliError {
    pub(crate) fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}

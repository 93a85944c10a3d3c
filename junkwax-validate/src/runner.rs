//! Corpus discovery and the two-pass validation run.

use std::path::PathBuf;

use junkwax_catalog::json;
use thiserror::Error;

use crate::attributes::{AttributeCorpus, CrossFileFinding, FileReport, validate_file};

#[derive(Debug, Error)]
pub enum ValidateError {
    /// Input paths could not be expanded into release files.
    #[error("{0}")]
    Files(#[from] junkwax_catalog::JsonError),

    #[error("No release files found under {0}")]
    NoFiles(String),
}

/// The complete result of a validation run.
#[derive(Debug)]
pub struct ValidationOutcome {
    pub file_reports: Vec<FileReport>,
    pub cross_file: Vec<CrossFileFinding>,
}

impl ValidationOutcome {
    /// True when no per-file error and no cross-file inconsistency exists.
    pub fn passed(&self) -> bool {
        self.cross_file.is_empty() && self.file_reports.iter().all(|r| !r.has_errors())
    }
}

/// Run the full validation: first pass collects the corpus dictionary,
/// second pass validates each file against it, then the cross-file check.
pub fn validate_paths(paths: &[PathBuf]) -> Result<ValidationOutcome, ValidateError> {
    let mut files = Vec::new();
    for path in paths {
        files.extend(json::find_release_files(path)?);
    }
    if files.is_empty() {
        let shown = paths
            .first()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ".".to_string());
        return Err(ValidateError::NoFiles(shown));
    }

    let corpus = AttributeCorpus::collect(&files);
    let file_reports = files
        .iter()
        .map(|file| validate_file(file, &corpus))
        .collect();

    Ok(ValidationOutcome {
        file_reports,
        cross_file: corpus.cross_file_findings(),
    })
}

use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use junkwax_validate::validate_paths;

use crate::error::CliError;

/// Validate attribute dictionaries across one or more files or trees.
///
/// Errors and suggested definitions go to stderr; the suggestions print as
/// one JSON array block per file for copy/paste back into the release.
pub(crate) fn run(paths: &[PathBuf]) -> Result<(), CliError> {
    let outcome = validate_paths(paths)?;

    let mut failing_files = 0usize;
    for report in &outcome.file_reports {
        if !report.has_errors() {
            continue;
        }
        failing_files += 1;
        eprintln!();
        eprintln!("Errors in file: {}", report.path.display());
        for error in &report.errors {
            eprintln!("  Error: {error}");
        }
        if !report.suggestions.is_empty() {
            eprintln!();
            eprintln!("Suggested JSON definitions for missing attributes for this file:");
            eprintln!("{}", serde_json::to_string_pretty(&report.suggestions)?);
        }
    }

    if !outcome.cross_file.is_empty() {
        eprintln!();
        eprintln!("Cross-file consistency errors:");
        for finding in &outcome.cross_file {
            eprintln!("  Error: {finding}");
        }
    }

    if outcome.passed() {
        println!(
            "{} All {} release file(s) passed attribute validation and cross-file \
             consistency checks",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            outcome.file_reports.len(),
        );
        Ok(())
    } else {
        Err(CliError::failed(format!(
            "Validation failed: {} file(s) with errors, {} cross-file inconsistency(ies)",
            failing_files,
            outcome.cross_file.len(),
        )))
    }
}

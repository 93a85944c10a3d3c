use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use junkwax_catalog::json::find_release_files;
use junkwax_catalog::normalize::{NormalizeOutcome, normalize_file};

use crate::error::CliError;

/// Hoist attributes shared by every card of a set up to the set level,
/// across every release file under a path.
pub(crate) fn run(path: &Path) -> Result<(), CliError> {
    let files = find_release_files(path)?;

    let mut updated = 0usize;
    let mut rejected = 0usize;
    let mut failed = 0usize;

    for file in &files {
        match normalize_file(file) {
            Ok(NormalizeOutcome::Updated { sets_modified }) => {
                println!(
                    "{} {} ({} set(s) normalized)",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    file.display(),
                    sets_modified,
                );
                updated += 1;
            }
            Ok(NormalizeOutcome::Unchanged) => {}
            Ok(NormalizeOutcome::SchemaRejected(violations)) => {
                println!(
                    "{} {} skipped: {} structural violation(s), first: {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    file.display(),
                    violations.len(),
                    violations
                        .first()
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                );
                rejected += 1;
            }
            Err(e) => {
                log::error!("{e}");
                failed += 1;
            }
        }
    }

    println!(
        "{} file(s) normalized of {} scanned",
        updated,
        files.len(),
    );
    if rejected > 0 {
        println!("  {rejected} file(s) skipped on structural checks");
    }
    if failed > 0 {
        println!(
            "  {} {} file(s) could not be processed",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            failed,
        );
    }
    Ok(())
}

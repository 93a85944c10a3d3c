use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use junkwax_catalog::ids;
use junkwax_catalog::index;
use junkwax_catalog::json::find_release_files;

use crate::error::CliError;

/// Push index uniqueIds down into the referenced release files.
pub(crate) fn run_propagate(index_path: &Path) -> Result<(), CliError> {
    let stats = index::propagate_release_ids(index_path)?;

    println!(
        "{} {} release file(s) updated, {} entry(ies) skipped",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.updated,
        stats.skipped,
    );
    if stats.failed > 0 {
        return Err(CliError::failed(format!(
            "{} release file(s) could not be updated",
            stats.failed,
        )));
    }
    Ok(())
}

/// Add missing set/card uniqueIds to every release file under a path.
pub(crate) fn run_assign(path: &Path) -> Result<(), CliError> {
    let files = find_release_files(path)?;

    let mut updated_files = 0usize;
    let mut total = ids::AssignStats::default();
    let mut failed = 0usize;

    for file in &files {
        match ids::assign_ids_in_file(file) {
            Ok(stats) if stats.total() > 0 => {
                println!(
                    "{} {} ({} set id(s), {} card id(s))",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    file.display(),
                    stats.sets,
                    stats.cards,
                );
                total.sets += stats.sets;
                total.cards += stats.cards;
                updated_files += 1;
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("{e}");
                failed += 1;
            }
        }
    }

    println!(
        "{} file(s) updated of {} scanned, {} id(s) added",
        updated_files,
        files.len(),
        total.total(),
    );
    if failed > 0 {
        println!(
            "  {} {} file(s) could not be processed",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            failed,
        );
    }
    Ok(())
}

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use junkwax_export::{ExportProgress, run_export};

use crate::error::CliError;

/// Flatten a catalog tree into the analytical CSV table.
pub(crate) fn run(root: &Path, output: &Path) -> Result<(), CliError> {
    println!(
        "Flattening catalog in: {}",
        root.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("/-\\|"),
    );

    let result = run_export(root, output, |progress| match progress {
        ExportProgress::Scanning => {
            pb.set_message("Scanning catalog tree...");
            pb.tick();
        }
        ExportProgress::File { index, total, name } => {
            pb.set_message(format!("[{}/{}] Flattening {}", index + 1, total, name));
            pb.tick();
        }
        ExportProgress::Done => {
            pb.finish_and_clear();
        }
    });

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    println!(
        "{} {} record(s) from {} file(s) written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.records,
        summary.files_processed,
        output.display().if_supports_color(Stdout, |t| t.bold()),
    );
    if summary.files_skipped > 0 {
        println!(
            "  {} {} file(s) skipped (see log for details)",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            summary.files_skipped,
        );
    }

    Ok(())
}

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use junkwax_catalog::json::{self, DEFAULT_INDENT};
use junkwax_ingest::{build_release, default_rules, read_checklist};

use crate::error::CliError;

/// Build a release file from a checklist CSV.
pub(crate) fn run(input: &Path, output: &Path) -> Result<(), CliError> {
    let checklist = read_checklist(input)?;

    println!(
        "Ingesting {} ({} rows)",
        input.display().if_supports_color(Stdout, |t| t.cyan()),
        checklist.rows.len(),
    );
    if checklist.explicit_parallels {
        println!(
            "{}",
            "Explicit parallel grouping (PARALLEL OF column present)"
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let (release, report) = build_release(&checklist, &default_rules());
    json::write_release(output, &release, DEFAULT_INDENT)?;

    println!(
        "{} {} written",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        output.display().if_supports_color(Stdout, |t| t.bold()),
    );
    println!(
        "  {} sets, {} cards, {} set parallels, {} card parallels",
        report.sets, report.cards, report.set_parallels, report.card_parallels,
    );
    if report.synthesized_cards > 0 {
        println!(
            "  {} {} card(s) synthesized for parallels with no base version",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.synthesized_cards,
        );
    }
    if report.duplicates_dropped > 0 {
        println!(
            "  {} {} duplicate row(s) dropped",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.duplicates_dropped,
        );
    }

    Ok(())
}

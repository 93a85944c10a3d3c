//! junkwax CLI
//!
//! Command-line interface for building, validating, and flattening
//! trading-card release catalogs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "junkwax")]
#[command(about = "Build, validate, and flatten trading-card release catalogs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a release file from a tabular checklist CSV
    Ingest {
        /// Checklist CSV to read
        input: PathBuf,

        /// Release JSON file to write
        output: PathBuf,
    },

    /// Check attribute dictionaries within and across release files
    Validate {
        /// Release files or directories to validate
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Flatten a catalog tree into one analytical CSV table
    Export {
        /// Categories root laid out as <root>/<category>/<year>/*.json
        root: PathBuf,

        /// Output table path
        #[arg(short, long, default_value = "output/dataset.csv")]
        output: PathBuf,
    },

    /// Push index uniqueIds down into the referenced release files
    PropagateIds {
        /// Top-level category/year/release index JSON file
        index: PathBuf,
    },

    /// Add missing set and card uniqueIds to release files
    AssignIds {
        /// Release file or directory tree
        path: PathBuf,
    },

    /// Hoist attributes shared by every card of a set to the set level
    Normalize {
        /// Release file or directory tree
        path: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Ingest { input, output } => commands::ingest::run(&input, &output),
        Commands::Validate { paths } => commands::validate::run(&paths),
        Commands::Export { root, output } => commands::export::run(&root, &output),
        Commands::PropagateIds { index } => commands::ids::run_propagate(&index),
        Commands::AssignIds { path } => commands::ids::run_assign(&path),
        Commands::Normalize { path } => commands::normalize::run(&path),
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

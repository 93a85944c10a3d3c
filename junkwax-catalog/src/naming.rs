//! Release file-naming conventions.
//!
//! Release files live at `<category>/<year>/<year>-<formatted name>.json`,
//! where the formatted name replaces spaces with hyphens and drops
//! apostrophes (`1990 Upper Deck` → `1990-Upper-Deck.json`). The label used
//! in flattened output is the filename stem after the leading year.

use std::path::{Path, PathBuf};

/// Format a release name for use in a file name: spaces become hyphens,
/// apostrophes are removed.
pub fn format_release_name(name: &str) -> String {
    name.replace(' ', "-").replace('\'', "")
}

/// The file name for a release: `<year>-<formatted name>.json`.
pub fn release_file_name(year: &str, name: &str) -> String {
    format!("{year}-{}.json", format_release_name(name))
}

/// The full path of a release file under a categories root.
pub fn release_file_path(base: &Path, category: &str, year: &str, name: &str) -> PathBuf {
    base.join(category)
        .join(year)
        .join(release_file_name(year, name))
}

/// The release label encoded in a file stem: everything after the first
/// hyphen (`1990-Topps` → `Topps`). A stem with no hyphen is its own label.
pub fn release_label(stem: &str) -> &str {
    match stem.split_once('-') {
        Some((_, label)) => label,
        None => stem,
    }
}

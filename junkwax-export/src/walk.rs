//! Discovery of release files under a categories root.
//!
//! The on-disk layout is `<root>/<category>/<year>/<year>-<release>.json`.
//! Traversal is sorted at every level so downstream output is deterministic.

use std::path::{Path, PathBuf};

use junkwax_catalog::naming;

/// One release file found under the categories root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseFileRef {
    pub category: String,
    pub year: String,
    /// Release label from the filename stem (text after the year prefix).
    pub label: String,
    pub path: PathBuf,
}

/// Walk `<root>/<category>/<year>/*.json` and return the release files in
/// sorted traversal order.
pub fn walk_categories(root: &Path) -> std::io::Result<Vec<ReleaseFileRef>> {
    let mut refs = Vec::new();

    for category_dir in sorted_dirs(root)? {
        let category = dir_name(&category_dir);
        for year_dir in sorted_dirs(&category_dir)? {
            let year = dir_name(&year_dir);
            for file in sorted_json_files(&year_dir)? {
                let stem = file
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default();
                refs.push(ReleaseFileRef {
                    category: category.clone(),
                    year: year.clone(),
                    label: naming::release_label(stem).to_string(),
                    path: file,
                });
            }
        }
    }

    Ok(refs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

fn sorted_dirs(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(path)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

fn sorted_json_files(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(path)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();
    Ok(files)
}

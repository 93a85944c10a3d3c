//! JSON I/O for release files.
//!
//! Release files are rewritten wholesale, so the reader/writer pair takes
//! care of the two fidelity concerns that survive a rewrite: top-level key
//! order (fixed by the `Release` type, unknown keys appended in original
//! order) and the file's indentation style, detected from the first
//! indented line.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::types::Release;

/// Default indentation unit when a file has no indented line at all.
pub const DEFAULT_INDENT: &str = "  ";

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("JSON serialize error for {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },
}

impl JsonError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn serialize(path: &Path, source: serde_json::Error) -> Self {
        Self::Serialize {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Read and deserialize a release file into the typed model.
pub fn read_release(path: &Path) -> Result<Release, JsonError> {
    let contents = std::fs::read_to_string(path).map_err(|e| JsonError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| JsonError::parse(path, e))
}

/// Read a release file as an order-preserving untyped document, along with
/// its detected indentation unit.
pub fn read_release_value(path: &Path) -> Result<(serde_json::Value, String), JsonError> {
    let contents = std::fs::read_to_string(path).map_err(|e| JsonError::io(path, e))?;
    let value = serde_json::from_str(&contents).map_err(|e| JsonError::parse(path, e))?;
    Ok((value, detect_indent(&contents)))
}

/// Detect the indentation unit used by a JSON document.
///
/// Returns the leading whitespace run of the first indented line, or two
/// spaces when no line is indented.
pub fn detect_indent(contents: &str) -> String {
    for line in contents.lines() {
        if line.starts_with(' ') || line.starts_with('\t') {
            return line
                .chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .collect();
        }
    }
    DEFAULT_INDENT.to_string()
}

/// Serialize a value with the given indentation unit.
pub fn to_pretty_string<T: Serialize>(value: &T, indent: &str) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write a release file, replacing any existing contents.
pub fn write_release(path: &Path, release: &Release, indent: &str) -> Result<(), JsonError> {
    write_pretty(path, release, indent)
}

/// Expand a path into release files: a file stands alone, a directory is
/// walked recursively for `*.json`. The result is sorted.
pub fn find_release_files(path: &Path) -> Result<Vec<std::path::PathBuf>, JsonError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    let mut pending = vec![path.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = std::fs::read_dir(&dir).map_err(|e| JsonError::io(&dir, e))?;
        for entry in entries.flatten() {
            let entry_path = entry.path();
            if entry_path.is_dir() {
                pending.push(entry_path);
            } else if entry_path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"))
            {
                files.push(entry_path);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Write any serializable document with the given indentation unit.
pub fn write_pretty<T: Serialize>(path: &Path, value: &T, indent: &str) -> Result<(), JsonError> {
    let mut contents = to_pretty_string(value, indent).map_err(|e| JsonError::serialize(path, e))?;
    contents.push('\n');
    std::fs::write(path, contents).map_err(|e| JsonError::io(path, e))
}

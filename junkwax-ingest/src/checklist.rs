//! Checklist CSV parsing.
//!
//! A checklist is an ordered table with one row per physical card (or per
//! card-parallel). Required columns: `YEAR`, `BRAND`, `PROGRAM`, `SPORT`,
//! `CARD SET`, `CARD NUMBER`, `ATHLETE`, `SEQUENCE`. Optional columns:
//! `PARALLEL OF` (switches grouping to explicit mode) and `UNIQUE ID`.

use std::io::Read;
use std::path::Path;

use crate::error::IngestError;

/// One checklist row, with cells normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistRow {
    /// The raw (trimmed) set label, e.g. "1990 Topps Gold".
    pub set_label: String,
    /// Canonical card number: trimmed, leading zeros dropped when numeric.
    pub card_number: String,
    /// Athlete/card name.
    pub card_name: String,
    /// Print-run sequence, when the cell holds digits.
    pub sequence: Option<u32>,
    /// Base-set label from the `PARALLEL OF` column, when present and
    /// non-empty.
    pub parallel_of: Option<String>,
    /// Pre-existing identity from the `UNIQUE ID` column.
    pub unique_id: Option<String>,
}

/// A parsed checklist: release-level metadata plus the ordered rows.
#[derive(Debug, Clone)]
pub struct Checklist {
    pub year: String,
    pub brand: String,
    pub program: String,
    pub sport: String,
    /// True when the source carried a `PARALLEL OF` column — grouping runs
    /// in explicit mode.
    pub explicit_parallels: bool,
    pub rows: Vec<ChecklistRow>,
}

/// Read a checklist CSV from a file path.
pub fn read_checklist(path: &Path) -> Result<Checklist, IngestError> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::io(path, e))?;
    parse_checklist(file)
}

/// Parse a checklist CSV from any reader.
pub fn parse_checklist<R: Read>(reader: R) -> Result<Checklist, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(IngestError::Csv)?.clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let require = |name: &str| column(name).ok_or_else(|| IngestError::missing_column(name));

    let year_col = require("YEAR")?;
    let brand_col = require("BRAND")?;
    let program_col = require("PROGRAM")?;
    let sport_col = require("SPORT")?;
    let set_col = require("CARD SET")?;
    let number_col = require("CARD NUMBER")?;
    let athlete_col = require("ATHLETE")?;
    let seq_col = require("SEQUENCE")?;
    let parallel_col = column("PARALLEL OF");
    let id_col = column("UNIQUE ID");

    let mut rows = Vec::new();
    let mut meta: Option<(String, String, String, String)> = None;

    for record in csv_reader.records() {
        let record = record.map_err(IngestError::Csv)?;
        let cell = |i: usize| record.get(i).unwrap_or("").trim().to_string();
        let optional_cell = |i: Option<usize>| {
            i.map(|i| cell(i)).filter(|v| !v.is_empty())
        };

        if meta.is_none() {
            meta = Some((
                cell(year_col),
                cell(brand_col),
                cell(program_col),
                cell(sport_col),
            ));
        }

        rows.push(ChecklistRow {
            set_label: cell(set_col),
            card_number: normalize_card_number(&cell(number_col)),
            card_name: cell(athlete_col),
            sequence: parse_sequence(&cell(seq_col)),
            parallel_of: optional_cell(parallel_col),
            unique_id: optional_cell(id_col),
        });
    }

    let Some((year, brand, program, sport)) = meta else {
        return Err(IngestError::Empty);
    };

    Ok(Checklist {
        year,
        brand,
        program,
        sport,
        explicit_parallels: parallel_col.is_some(),
        rows,
    })
}

impl Checklist {
    /// The release name assembled from the checklist metadata columns.
    pub fn release_name(&self) -> String {
        format!("{} {} {} {}", self.year, self.brand, self.program, self.sport)
    }
}

/// Canonicalize a card number: trimmed, and with leading zeros dropped when
/// the label is entirely numeric ("007" → "7", "T-12" unchanged).
pub fn normalize_card_number(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        let stripped = trimmed.trim_start_matches('0');
        if stripped.is_empty() {
            "0".to_string()
        } else {
            stripped.to_string()
        }
    } else {
        trimmed.to_string()
    }
}

/// Parse a sequence cell: digits parse to a print run, anything else is
/// treated as absent.
pub fn parse_sequence(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        trimmed.parse().ok()
    } else {
        None
    }
}

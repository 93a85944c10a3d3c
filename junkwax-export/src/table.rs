//! Final table ordering and the CSV artifact writer.

use std::path::Path;

use serde::Serialize;

use crate::error::ExportError;
use crate::flatten::FlatRecord;

/// Stable sort by year ascending, then release label ascending. Years that
/// parse as numbers order numerically; anything else orders after them,
/// lexicographically. Ties keep traversal order.
pub fn sort_records(records: &mut [FlatRecord]) {
    records.sort_by(|a, b| {
        year_key(&a.year)
            .cmp(&year_key(&b.year))
            .then_with(|| a.release.cmp(&b.release))
    });
}

fn year_key(year: &str) -> (u8, u32, &str) {
    match year.parse::<u32>() {
        Ok(n) => (0, n, ""),
        Err(_) => (1, 0, year),
    }
}

/// One row of the written table. The in-memory record kind is deliberately
/// absent here.
#[derive(Debug, Serialize)]
struct TableRow<'a> {
    category: &'a str,
    release_unique_id: &'a str,
    year: &'a str,
    release: &'a str,
    release_name: &'a str,
    set_unique_id: &'a str,
    set_name: &'a str,
    card_unique_id: &'a str,
    card_parent_unique_id: &'a str,
    card_number: &'a str,
    card_name: &'a str,
    attributes: String,
    note: &'a str,
    parallel: &'a str,
    numbered_to: Option<u32>,
    insert_odds: &'a str,
}

impl<'a> TableRow<'a> {
    fn from_record(record: &'a FlatRecord) -> Self {
        TableRow {
            category: &record.category,
            release_unique_id: &record.release_unique_id,
            year: &record.year,
            release: &record.release,
            release_name: &record.release_name,
            set_unique_id: &record.set_unique_id,
            set_name: &record.set_name,
            card_unique_id: &record.card_unique_id,
            card_parent_unique_id: &record.card_parent_unique_id,
            card_number: &record.card_number,
            card_name: &record.card_name,
            attributes: record.attributes.join("|"),
            note: &record.note,
            parallel: &record.parallel,
            numbered_to: record.numbered_to,
            insert_odds: record.insert_odds.as_deref().unwrap_or(""),
        }
    }
}

/// Write the full table, replacing any existing artifact.
pub fn write_table(path: &Path, records: &[FlatRecord]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ExportError::io(path, e))?;
        }
    }

    let file = std::fs::File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(TableRow::from_record(record))?;
    }
    writer.flush().map_err(|e| ExportError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::RecordKind;

    fn record(year: &str, release: &str, card_name: &str) -> FlatRecord {
        FlatRecord {
            kind: RecordKind::Base,
            category: "baseball".to_string(),
            release_unique_id: "r".to_string(),
            year: year.to_string(),
            release: release.to_string(),
            release_name: format!("{year} {release}"),
            set_unique_id: "s".to_string(),
            set_name: "Base".to_string(),
            card_unique_id: format!("{year}-{release}-{card_name}"),
            card_parent_unique_id: String::new(),
            card_number: "1".to_string(),
            card_name: card_name.to_string(),
            attributes: vec!["AU".to_string(), "RELIC".to_string()],
            note: String::new(),
            parallel: String::new(),
            numbered_to: Some(500),
            insert_odds: None,
        }
    }

    #[test]
    fn sorts_by_year_then_release_stably() {
        let mut records = vec![
            record("1991", "Score", "A"),
            record("1990", "Topps", "B"),
            record("1990", "Donruss", "C"),
            record("1990", "Topps", "D"),
        ];
        sort_records(&mut records);

        let order: Vec<(&str, &str, &str)> = records
            .iter()
            .map(|r| (r.year.as_str(), r.release.as_str(), r.card_name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("1990", "Donruss", "C"),
                ("1990", "Topps", "B"),
                ("1990", "Topps", "D"),
                ("1991", "Score", "A"),
            ]
        );
    }

    #[test]
    fn non_numeric_years_sort_after_numeric() {
        let mut records = vec![
            record("misc", "Promos", "A"),
            record("1990", "Topps", "B"),
        ];
        sort_records(&mut records);
        assert_eq!(records[0].year, "1990");
        assert_eq!(records[1].year, "misc");
    }

    #[test]
    fn written_table_has_expected_header_and_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("dataset.csv");
        write_table(&path, &[record("1990", "Topps", "Player A")]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "category,release_unique_id,year,release,release_name,set_unique_id,set_name,\
             card_unique_id,card_parent_unique_id,card_number,card_name,attributes,note,\
             parallel,numbered_to,insert_odds"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("AU|RELIC"));
        assert!(row.contains("500"));
    }
}

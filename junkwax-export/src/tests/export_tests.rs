use super::*;

use std::path::PathBuf;

fn write_file(root: &std::path::Path, category: &str, year: &str, name: &str, json: &str) {
    let dir = root.join(category).join(year);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(name), json).unwrap();
}

fn run(root: &std::path::Path) -> (Result<ExportSummary, ExportError>, PathBuf) {
    let output = root.join("output").join("dataset.csv");
    let result = run_export(root, &output, |_| {});
    (result, output)
}

#[test]
fn end_to_end_export_writes_sorted_table() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_file(
        root,
        "baseball",
        "1991",
        "1991-Score.json",
        r#"{
  "name": "1991 Score Baseball",
  "uniqueId": "rel-score",
  "sets": [{
    "name": "Base",
    "uniqueId": "set-score",
    "cards": [{"uniqueId": "card-score-1", "number": "1", "name": "Player S"}]
  }]
}"#,
    );
    write_file(
        root,
        "baseball",
        "1990",
        "1990-Topps.json",
        r#"{
  "name": "1990 Topps Baseball",
  "uniqueId": "rel-topps",
  "sets": [{
    "name": "Base",
    "uniqueId": "set-topps",
    "parallels": [{"name": "Tiffany"}],
    "cards": [{"uniqueId": "card-topps-1", "number": "1", "name": "Player T"}]
  }]
}"#,
    );

    let (result, output) = run(root);
    let summary = result.unwrap();
    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.files_skipped, 0);
    assert_eq!(summary.records, 3);

    let contents = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4); // header + 3 records
    // 1990 rows precede the 1991 row.
    assert!(lines[1].contains("1990"));
    assert!(lines[2].contains("Tiffany"));
    assert!(lines[3].contains("1991"));
}

#[test]
fn malformed_file_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_file(root, "baseball", "1990", "1990-Broken.json", "{not json");
    write_file(
        root,
        "baseball",
        "1990",
        "1990-Topps.json",
        r#"{"name": "1990 Topps", "sets": [{"name": "Base", "cards": [{"name": "A"}]}]}"#,
    );

    let (result, output) = run(root);
    let summary = result.unwrap();
    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.files_skipped, 1);
    assert!(output.exists());
}

#[test]
fn structurally_invalid_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    // Parses as JSON but has no name and no sets.
    write_file(root, "baseball", "1990", "1990-Odd.json", r#"{"version": "1.0"}"#);

    let (result, _) = run(root);
    let summary = result.unwrap();
    assert_eq!(summary.files_processed, 0);
    assert_eq!(summary.files_skipped, 1);
}

#[test]
fn shared_set_id_across_files_aborts_with_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let body = |set_name: &str, card_id: &str| {
        format!(
            r#"{{"name": "Release", "sets": [{{"name": "{set_name}", "uniqueId": "set-shared",
                "cards": [{{"uniqueId": "{card_id}", "number": "1", "name": "A"}}]}}]}}"#
        )
    };
    write_file(root, "baseball", "1990", "1990-One.json", &body("Base", "card-1"));
    write_file(root, "baseball", "1990", "1990-Two.json", &body("Inserts", "card-2"));

    let (result, output) = run(root);
    match result {
        Err(ExportError::Integrity(report)) => {
            assert_eq!(report.set_conflicts.len(), 1);
            assert_eq!(report.set_conflicts[0].unique_id, "set-shared");
        }
        other => panic!("expected integrity failure, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn duplicate_card_id_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_file(
        root,
        "baseball",
        "1990",
        "1990-Dup.json",
        r#"{"name": "Release", "sets": [{"name": "Base", "uniqueId": "set-1", "cards": [
            {"uniqueId": "card-dup", "number": "1", "name": "A"},
            {"uniqueId": "card-dup", "number": "2", "name": "B"}
        ]}]}"#,
    );

    let (result, _) = run(root);
    match result {
        Err(ExportError::Integrity(report)) => {
            assert_eq!(report.duplicate_card_ids, vec!["card-dup"]);
        }
        other => panic!("expected integrity failure, got {other:?}"),
    }
}

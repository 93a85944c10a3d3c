use super::*;

use crate::runner::validate_paths;

fn write(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

const CLEAN_FILE: &str = r#"{
  "name": "1990 Test",
  "attributes": [{"attribute": "AU", "note": "Autograph"}],
  "sets": [{
    "name": "Signatures",
    "cards": [{"number": "1", "name": "A", "attributes": ["AU"]}]
  }]
}"#;

#[test]
fn clean_file_passes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "clean.json", CLEAN_FILE);

    let corpus = AttributeCorpus::collect(std::slice::from_ref(&path));
    let report = validate_file(&path, &corpus);
    assert!(!report.has_errors(), "unexpected errors: {:?}", report.errors);
    assert!(report.suggestions.is_empty());
}

#[test]
fn used_but_undefined_code_is_flagged_with_suggestion() {
    let dir = tempfile::tempdir().unwrap();
    // One file defines AU; the other uses AU without defining it.
    let defined = write(dir.path(), "defined.json", CLEAN_FILE);
    let missing = write(
        dir.path(),
        "missing.json",
        r#"{
  "name": "1991 Test",
  "sets": [{
    "name": "Autographs",
    "cards": [{"number": "1", "name": "B", "attributes": ["AU"]}]
  }]
}"#,
    );

    let corpus = AttributeCorpus::collect(&[defined, missing.clone()]);
    let report = validate_file(&missing, &corpus);
    assert!(report.has_errors());
    assert!(report.errors.iter().any(|e| e.contains("'AU'")));
    assert_eq!(report.suggestions.len(), 1);
    assert_eq!(report.suggestions[0].attribute, "AU");
    // The corpus-wide definition is reused for the suggestion.
    assert_eq!(report.suggestions[0].note, "Autograph");
}

#[test]
fn unknown_code_gets_placeholder_suggestion() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "novel.json",
        r#"{
  "name": "1991 Test",
  "sets": [{
    "name": "Base",
    "cards": [{"number": "1", "name": "B", "attributes": ["HOLO"]}]
  }]
}"#,
    );

    let corpus = AttributeCorpus::collect(std::slice::from_ref(&path));
    let report = validate_file(&path, &corpus);
    assert_eq!(report.suggestions.len(), 1);
    assert_eq!(report.suggestions[0].note, UNDEFINED_NOTE);
}

#[test]
fn inconsistent_corpus_suggests_most_frequent_note() {
    let dir = tempfile::tempdir().unwrap();
    let one = write(
        dir.path(),
        "a.json",
        r#"{"name": "A", "attributes": [{"attribute": "AU", "note": "Autograph"}],
            "sets": [{"name": "S", "cards": [{"name": "x", "attributes": ["AU"]}]}]}"#,
    );
    let two = write(
        dir.path(),
        "b.json",
        r#"{"name": "B", "attributes": [{"attribute": "AU", "note": "Autograph"}],
            "sets": [{"name": "S", "cards": [{"name": "x", "attributes": ["AU"]}]}]}"#,
    );
    let three = write(
        dir.path(),
        "c.json",
        r#"{"name": "C", "attributes": [{"attribute": "AU", "note": "Signed"}],
            "sets": [{"name": "S", "cards": [{"name": "x", "attributes": ["AU"]}]}]}"#,
    );
    let user = write(
        dir.path(),
        "d.json",
        r#"{"name": "D", "sets": [{"name": "S", "cards": [{"name": "x", "attributes": ["AU"]}]}]}"#,
    );

    let corpus = AttributeCorpus::collect(&[one, two, three, user.clone()]);
    assert!(corpus.canonical("AU").is_none());

    let report = validate_file(&user, &corpus);
    assert_eq!(report.suggestions[0].note, "Autograph");
}

#[test]
fn defined_but_unused_code_is_flagged() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "unused.json",
        r#"{
  "name": "1990 Test",
  "attributes": [{"attribute": "RELIC", "note": "Relic"}],
  "sets": [{"name": "Base", "cards": [{"number": "1", "name": "A"}]}]
}"#,
    );

    let corpus = AttributeCorpus::collect(std::slice::from_ref(&path));
    let report = validate_file(&path, &corpus);
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("'RELIC'") && e.contains("not found on any card"))
    );
}

#[test]
fn same_file_conflicting_redefinition_is_flagged() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "conflict.json",
        r#"{
  "name": "1990 Test",
  "attributes": [
    {"attribute": "AU", "note": "Autograph"},
    {"attribute": "AU", "note": "Signed"}
  ],
  "sets": [{"name": "S", "cards": [{"name": "x", "attributes": ["AU"]}]}]
}"#,
    );

    let corpus = AttributeCorpus::collect(std::slice::from_ref(&path));
    let report = validate_file(&path, &corpus);
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("conflicting notes"))
    );
}

#[test]
fn variation_attributes_are_collected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "variation.json",
        r#"{
  "name": "1990 Test",
  "sets": [{
    "name": "Base",
    "cards": [{
      "number": "1", "name": "A",
      "variations": [{"variation": "Error", "attributes": ["ERR"]}]
    }]
  }]
}"#,
    );

    let corpus = AttributeCorpus::collect(std::slice::from_ref(&path));
    let report = validate_file(&path, &corpus);
    assert!(report.errors.iter().any(|e| e.contains("'ERR'")));
}

#[test]
fn unreadable_file_reports_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "broken.json", "{not json");
    write(dir.path(), "clean.json", CLEAN_FILE);

    let outcome = validate_paths(&[dir.path().to_path_buf()]).unwrap();
    assert!(!outcome.passed());
    assert_eq!(outcome.file_reports.len(), 2);
    let broken = &outcome.file_reports[0];
    assert!(broken.errors[0].contains("Failed to read JSON file"));
    assert!(!outcome.file_reports[1].has_errors());
}

#[test]
fn cross_file_inconsistency_fails_even_when_files_pass_alone() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "a.json",
        r#"{"name": "A", "attributes": [{"attribute": "AU", "note": "Autograph"}],
            "sets": [{"name": "S", "cards": [{"name": "x", "attributes": ["AU"]}]}]}"#,
    );
    write(
        dir.path(),
        "b.json",
        r#"{"name": "B", "attributes": [{"attribute": "AU", "note": "Signed"}],
            "sets": [{"name": "S", "cards": [{"name": "x", "attributes": ["AU"]}]}]}"#,
    );

    let outcome = validate_paths(&[dir.path().to_path_buf()]).unwrap();
    assert!(outcome.file_reports.iter().all(|r| !r.has_errors()));
    assert!(!outcome.passed());
    assert_eq!(outcome.cross_file.len(), 1);
    let finding = &outcome.cross_file[0];
    assert_eq!(finding.attribute, "AU");
    assert_eq!(finding.notes.len(), 2);
    assert!(finding.to_string().contains("Inconsistent note"));
}

#[test]
fn missing_sets_property_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "nosets.json", r#"{"name": "A"}"#);

    let corpus = AttributeCorpus::collect(std::slice::from_ref(&path));
    let report = validate_file(&path, &corpus);
    assert!(report.errors.iter().any(|e| e.contains("'sets'")));
}

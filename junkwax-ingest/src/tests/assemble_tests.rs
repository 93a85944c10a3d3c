use super::*;
use crate::checklist::ChecklistRow;
use crate::rules::default_rules;

fn row(set_label: &str, number: &str, name: &str, sequence: Option<u32>) -> ChecklistRow {
    ChecklistRow {
        set_label: set_label.to_string(),
        card_number: number.to_string(),
        card_name: name.to_string(),
        sequence,
        parallel_of: None,
        unique_id: None,
    }
}

fn checklist(rows: Vec<ChecklistRow>) -> Checklist {
    Checklist {
        year: "1990".to_string(),
        brand: "Topps".to_string(),
        program: "Flagship".to_string(),
        sport: "Baseball".to_string(),
        explicit_parallels: false,
        rows,
    }
}

#[test]
fn full_coverage_parallel_is_promoted_to_set_level() {
    // The worked example: a Gold row covering the whole base set becomes one
    // set-level parallel with its shared print run.
    let (release, report) = build_release(
        &checklist(vec![
            row("1990 Topps", "1", "A", None),
            row("1990 Topps Gold", "1", "A", Some(500)),
        ]),
        &default_rules(),
    );

    assert_eq!(release.sets.len(), 1);
    let set = &release.sets[0];
    assert_eq!(set.name, "1990 Topps");
    assert_eq!(set.cards.len(), 1);
    assert_eq!(set.cards[0].number.as_deref(), Some("1"));
    assert_eq!(set.cards[0].name, "A");
    assert!(set.cards[0].parallels.is_empty());

    assert_eq!(set.parallels.len(), 1);
    assert_eq!(set.parallels[0].name, "Gold");
    assert_eq!(set.parallels[0].numbered_to, Some(500));

    assert_eq!(report.sets, 1);
    assert_eq!(report.cards, 1);
    assert_eq!(report.set_parallels, 1);
    assert_eq!(report.card_parallels, 0);
}

#[test]
fn partial_parallel_attaches_to_matching_cards() {
    let (release, report) = build_release(
        &checklist(vec![
            row("1990 Topps", "1", "A", None),
            row("1990 Topps", "2", "B", None),
            row("1990 Topps Gold", "1", "A", Some(100)),
        ]),
        &default_rules(),
    );

    let set = &release.sets[0];
    assert!(set.parallels.is_empty());
    assert_eq!(set.cards[0].parallels.len(), 1);
    assert_eq!(set.cards[0].parallels[0].name, "Gold");
    assert_eq!(set.cards[0].parallels[0].numbered_to, Some(100));
    assert!(set.cards[1].parallels.is_empty());
    assert_eq!(report.card_parallels, 1);
}

#[test]
fn orphan_parallel_row_synthesizes_a_card() {
    let (release, report) = build_release(
        &checklist(vec![
            row("1990 Topps", "1", "A", None),
            row("1990 Topps", "2", "B", None),
            row("1990 Topps Gold", "3", "C", Some(50)),
        ]),
        &default_rules(),
    );

    let set = &release.sets[0];
    assert_eq!(set.cards.len(), 3);
    let synthesized = &set.cards[2];
    assert_eq!(synthesized.number.as_deref(), Some("3"));
    assert_eq!(synthesized.name, "C");
    assert_eq!(synthesized.note.as_deref(), Some("No Base Set Version"));
    assert_eq!(synthesized.numbered_to, Some(50));
    assert_eq!(synthesized.parallels.len(), 1);
    assert_eq!(synthesized.parallels[0].name, "Gold");
    assert_eq!(report.synthesized_cards, 1);
}

#[test]
fn uniform_base_sequence_is_promoted_and_stripped() {
    let (release, _) = build_release(
        &checklist(vec![
            row("Signature Series", "1", "A", Some(250)),
            row("Signature Series", "2", "B", Some(250)),
        ]),
        &default_rules(),
    );

    let set = &release.sets[0];
    assert_eq!(set.numbered_to, Some(250));
    assert!(set.cards.iter().all(|c| c.numbered_to.is_none()));
}

#[test]
fn mixed_sequences_stay_on_cards() {
    let (release, _) = build_release(
        &checklist(vec![
            row("Signature Series", "1", "A", Some(250)),
            row("Signature Series", "2", "B", Some(100)),
            row("Signature Series", "3", "C", None),
        ]),
        &default_rules(),
    );

    let set = &release.sets[0];
    assert_eq!(set.numbered_to, None);
    assert_eq!(set.cards[0].numbered_to, Some(250));
    assert_eq!(set.cards[1].numbered_to, Some(100));
    assert_eq!(set.cards[2].numbered_to, None);
}

#[test]
fn attribute_inference_covers_cards_and_dictionary() {
    let (release, _) = build_release(
        &checklist(vec![
            row("Rookie Autographs", "1", "A", None),
            row("Rookie Autographs", "2", "B", None),
        ]),
        &default_rules(),
    );

    let set = &release.sets[0];
    assert!(set.cards.iter().all(|c| c.attributes == vec!["AU"]));
    assert_eq!(release.attributes.len(), 1);
    assert_eq!(release.attributes[0].attribute, "AU");
    assert_eq!(release.attributes[0].note, "Autograph");
}

#[test]
fn plain_set_emits_no_dictionary() {
    let (release, _) = build_release(
        &checklist(vec![row("1990 Topps", "1", "A", None)]),
        &default_rules(),
    );
    assert!(release.attributes.is_empty());
}

#[test]
fn duplicate_base_rows_collapse_with_warning() {
    let (release, report) = build_release(
        &checklist(vec![
            row("1990 Topps", "1", "A", None),
            row("1990 Topps", "1", "A", None),
            row("1990 Topps", "2", "B", None),
        ]),
        &default_rules(),
    );

    assert_eq!(release.sets[0].cards.len(), 2);
    assert_eq!(report.duplicates_dropped, 1);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("1990 Topps"));
}

#[test]
fn release_header_fields() {
    let (release, _) = build_release(
        &checklist(vec![row("1990 Topps", "1", "A", None)]),
        &default_rules(),
    );

    assert_eq!(release.schema.as_deref(), Some(RELEASE_SCHEMA_URI));
    assert_eq!(release.name, "1990 Topps Flagship Baseball");
    assert_eq!(release.version.as_deref(), Some("1.0"));
    assert!(release.unique_id.is_some());
}

#[test]
fn row_supplied_identity_is_kept() {
    let mut with_id = row("1990 Topps", "1", "A", None);
    with_id.unique_id = Some("existing-id".to_string());
    let (release, _) = build_release(&checklist(vec![with_id]), &default_rules());

    assert_eq!(
        release.sets[0].cards[0].unique_id.as_deref(),
        Some("existing-id")
    );
}

#[test]
fn fresh_identities_differ_between_runs() {
    let rows = || checklist(vec![row("1990 Topps", "1", "A", None)]);
    let (first, _) = build_release(&rows(), &default_rules());
    let (second, _) = build_release(&rows(), &default_rules());

    assert_ne!(first.unique_id, second.unique_id);
    assert_ne!(
        first.sets[0].cards[0].unique_id,
        second.sets[0].cards[0].unique_id
    );
}

#[test]
fn uniform_sequence_requires_every_row() {
    assert_eq!(uniform_sequence(&[Some(500), Some(500)]), Some(500));
    assert_eq!(uniform_sequence(&[Some(500), None]), None);
    assert_eq!(uniform_sequence(&[Some(500), Some(100)]), None);
    assert_eq!(uniform_sequence(&[]), None);
}

//! Integration tests for the whole highlight pipeline
//!
//! Covers the contract surface end to end: selection round trips,
//! last-active-group-wins reconciliation, verse-number boundaries, palette
//! sufficiency, and the composed output for a small Hebrew document.

use std::time::Instant;

use rstest::rstest;
use shoresh::{
    compose, palette, HighlightCatalog, HighlightIndex, Segment, SelectionState, Study, Token,
};

#[rstest]
#[case("3", true)]
#[case("42", true)]
#[case("0", true)]
#[case("123", false)]
#[case("ג", false)]
#[case("3a", false)]
#[case("a3", false)]
fn verse_number_boundary(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(Token::word(text, 0).is_verse_number(), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(30)]
#[case(100)]
fn palette_yields_exactly_n_colors(#[case] n: usize) {
    assert_eq!(palette::assign(n).len(), n);
    assert_eq!(palette::assign_seeded(n, 0xdead_beef).len(), n);
}

#[test]
fn toggle_twice_restores_membership() {
    let now = Instant::now();
    for i in [0usize, 3, 17] {
        let mut selection = SelectionState::all_active(5);
        let before = selection.is_active(i);
        selection.toggle(i, now);
        selection.toggle(i, now);
        assert_eq!(selection.is_active(i), before);
    }
}

#[test]
fn select_all_then_clear_all_totality() {
    let now = Instant::now();
    let mut selection = SelectionState::new();
    selection.select_all(8, now);
    assert!((0..8).all(|i| selection.is_active(i)));
    selection.clear_all(now);
    assert!((0..8).all(|i| !selection.is_active(i)));
}

#[test]
fn overlapping_claims_resolve_to_higher_group() {
    let catalog = HighlightCatalog::from_json_str(
        r#"{"highlights":[
            {"words":[["אבג",5]]},
            {"words":[["אבג",5]]},
            {"words":[["אבג",5]]}
        ]}"#,
    )
    .unwrap();

    let index = HighlightIndex::build(&catalog, &SelectionState::all_active(3));
    assert_eq!(index.group_for(5), Some(2));

    // Deactivating the winner falls back to the next-highest claimant.
    let mut selection = SelectionState::all_active(3);
    selection.toggle(2, Instant::now());
    let index = HighlightIndex::build(&catalog, &selection);
    assert_eq!(index.group_for(5), Some(1));
}

#[test]
fn composed_document_matches_expected_segments() {
    let study = Study::from_documents(
        "1 אבגד־הוזח 2 טיכ",
        r#"{"highlights":[{"root":"ד.ג.ב","words":[["אבגד",1]]}]}"#,
    )
    .unwrap();
    assert!(study.issues().is_empty());

    let selection = SelectionState::all_active(study.catalog().len());
    let index = HighlightIndex::build(study.catalog(), &selection);
    let colors = palette::assign(study.catalog().len());
    let composed = compose(study.groups(), &index, &colors, false, None);

    let flat: Vec<&Segment> = composed.iter().flat_map(|g| &g.segments).collect();
    assert_eq!(flat.len(), 6);

    assert!(matches!(flat[0], Segment::VerseNumber { text } if text == "1"));
    assert!(
        matches!(flat[1], Segment::Word { text, highlight: Some(_), .. } if text == "אבגד")
    );
    assert!(matches!(flat[2], Segment::Maqaf));
    assert!(matches!(flat[3], Segment::Word { text, highlight: None, .. } if text == "הוזח"));
    assert!(matches!(flat[4], Segment::VerseNumber { text } if text == "2"));
    assert!(matches!(flat[5], Segment::Word { text, highlight: None, .. } if text == "טיכ"));
}

#[test]
fn inconsistent_catalog_still_renders_with_reported_issues() {
    let study = Study::from_documents(
        "אבג דהו",
        r#"{"highlights":[{"words":[["אבג",0],["זחט",1],["אבג",12]]}]}"#,
    )
    .unwrap();

    // Two diagnostics: a text mismatch at index 1 and an out-of-range 12.
    assert_eq!(study.issues().len(), 2);

    // The index is still built from the catalog as supplied.
    let selection = SelectionState::all_active(1);
    let index = HighlightIndex::build(study.catalog(), &selection);
    assert_eq!(index.group_for(0), Some(0));
    assert_eq!(index.group_for(1), Some(0));
    assert_eq!(index.group_for(12), Some(0));
}

#[test]
fn empty_catalog_means_nothing_highlighted() {
    let study = Study::from_documents("אבג דהו", "{}").unwrap();
    let selection = SelectionState::all_active(study.catalog().len());
    let index = HighlightIndex::build(study.catalog(), &selection);
    let composed = compose(study.groups(), &index, &[], false, None);

    assert!(composed
        .iter()
        .flat_map(|g| &g.segments)
        .all(|s| !s.is_interactive()));
}

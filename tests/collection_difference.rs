//! Collection difference rendering and classification.

mod fixtures;

use fixtures::fixtures_dir;
use valuekit::testkit::loader::load_fixture;
use valuekit::{difference, DifferenceElement, FieldList, Origin, ToStringStyle};

#[test]
fn test_multiline_rendering_matches_fixture() {
    let result = difference(&["A", "B", "C"], &["A", "C", "D"]);
    let expected = load_fixture(fixtures_dir(), "rendering", "", "collection-difference.txt").unwrap();
    assert_eq!(result.to_string_with(&ToStringStyle::multiline_no_address()), expected);
}

#[test]
fn test_strings_classified_by_value() {
    let left: Vec<String> = ["red", "green", "blue"].iter().map(|s| s.to_string()).collect();
    let right: Vec<String> = ["blue", "cyan"].iter().map(|s| s.to_string()).collect();
    let result = difference(&left, &right);

    let only_left: Vec<&str> = result.only_in_left().map(|e| e.object().as_str()).collect();
    let only_right: Vec<&str> = result.only_in_right().map(|e| e.object().as_str()).collect();
    assert_eq!(only_left, vec!["red", "green"]);
    assert_eq!(only_right, vec!["cyan"]);
    assert!(result.in_both().all(|e| e.object() == "blue"));
}

#[test]
fn test_duplicates_keep_every_occurrence() {
    let result = difference(&[1, 1, 2], &[1]);
    let tagged: Vec<(Origin, i32)> = result.iter().map(|e| (e.found_in(), *e.object())).collect();
    assert_eq!(
        tagged,
        vec![(Origin::InBoth, 1), (Origin::InBoth, 1), (Origin::OnlyInLeft, 2)]
    );
}

#[test]
fn test_elements_compare_structurally() {
    let result = difference(&['x'], &['y']);
    let first = result.iter().next().cloned();
    assert_eq!(first, Some(DifferenceElement::new(Origin::OnlyInLeft, 'x')));
}

use haplomap::dataset::{DatasetIndex, Record};
use haplomap::haplogroup::{search, Forest, Namespace, SearchResult, UnresolvableReason};

fn record(id: &str, y: Option<&str>, mt: Option<&str>) -> Record {
    Record {
        id: id.to_string(),
        lat: Some(55.7),
        long: Some(13.2),
        locality: Some("Lund".to_string()),
        country: Some("Sweden".to_string()),
        y_haplogroup: y.map(String::from),
        mt_haplogroup: mt.map(String::from),
        age_interval: Some("3000-2001 BCE".to_string()),
    }
}

fn y_dataset(labels: &[&str]) -> DatasetIndex {
    DatasetIndex::from_records(
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| record(&format!("Y{:03}", i), Some(l), None))
            .collect(),
    )
}

fn mt_dataset(labels: &[&str]) -> DatasetIndex {
    DatasetIndex::from_records(
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| record(&format!("M{:03}", i), None, Some(l)))
            .collect(),
    )
}

#[test]
fn y_trunk_root_is_reached_on_first_hop() {
    // Scenario A: A0000's parent is the Y virtual root.
    let forest = Forest::bundled().unwrap();
    let index = y_dataset(&[]);
    let result = search(&forest, &index, Namespace::Y, "A0000", 3);
    assert_eq!(
        result,
        SearchResult::RootReached {
            namespace: Namespace::Y
        }
    );
}

#[test]
fn mt_trunk_root_is_reached_on_first_hop() {
    let forest = Forest::bundled().unwrap();
    let index = mt_dataset(&[]);
    let result = search(&forest, &index, Namespace::Mt, "L0", 3);
    assert_eq!(
        result,
        SearchResult::RootReached {
            namespace: Namespace::Mt
        }
    );
}

#[test]
fn y_off_trunk_confirmed_form_found_after_one_hop() {
    // Scenario B: the confirmed suffix candidate is present in the dataset.
    let forest = Forest::bundled().unwrap();
    let index = y_dataset(&["R1a1a1b1a", "I1a"]);
    let result = search(&forest, &index, Namespace::Y, "R1a1a1b1a1", 3);
    match result {
        SearchResult::Found {
            ancestor,
            ancestor_records,
            query_records,
            hops,
        } => {
            assert_eq!(ancestor, "R1a1a1b1a");
            assert_eq!(ancestor_records, vec![0]);
            assert!(query_records.is_empty());
            assert_eq!(hops, 1);
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn y_off_trunk_approximate_form_found_when_confirmed_absent() {
    let forest = Forest::bundled().unwrap();
    let index = y_dataset(&["R1b1a~"]);
    let result = search(&forest, &index, Namespace::Y, "R1b1a2", 3);
    match result {
        SearchResult::Found { ancestor, hops, .. } => {
            assert_eq!(ancestor, "R1b1a~");
            assert_eq!(hops, 1);
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn confirmed_form_wins_over_approximate_form() {
    // The pair is assumed mutually exclusive; if both ever occur, the
    // documented tie-break prefers the confirmed form.
    let forest = Forest::bundled().unwrap();
    let index = y_dataset(&["R1b1a", "R1b1a~"]);
    let result = search(&forest, &index, Namespace::Y, "R1b1a2", 3);
    match result {
        SearchResult::Found { ancestor, .. } => assert_eq!(ancestor, "R1b1a"),
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn y_approximate_query_strips_marker_and_character() {
    let forest = Forest::bundled().unwrap();
    let index = y_dataset(&["R1b1a1b"]);
    let result = search(&forest, &index, Namespace::Y, "R1b1a1b2~", 3);
    match result {
        SearchResult::Found { ancestor, hops, .. } => {
            assert_eq!(ancestor, "R1b1a1b");
            assert_eq!(hops, 1);
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn y_query_records_are_captured_at_entry() {
    let forest = Forest::bundled().unwrap();
    let index = y_dataset(&["R1a1a1b1a1", "R1a1a1b1a1", "R1a1a1b1a"]);
    let result = search(&forest, &index, Namespace::Y, "R1a1a1b1a1", 3);
    match result {
        SearchResult::Found {
            query_records,
            ancestor_records,
            ..
        } => {
            assert_eq!(query_records, vec![0, 1]);
            assert_eq!(ancestor_records, vec![2]);
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn mt_subtree_parent_found_after_one_hop() {
    // Scenario C: U5a1a1a is governed by the U sub-tree.
    let forest = Forest::bundled().unwrap();
    let index = mt_dataset(&["U5a1a1"]);
    let result = search(&forest, &index, Namespace::Mt, "U5a1a1a", 3);
    match result {
        SearchResult::Found { ancestor, hops, .. } => {
            assert_eq!(ancestor, "U5a1a1");
            assert_eq!(hops, 1);
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn mt_subtree_retries_up_the_local_edges() {
    // No match at U5a1a1 or U5a1a; U5a1 matches on the third hop.
    let forest = Forest::bundled().unwrap();
    let index = mt_dataset(&["U5a1"]);
    let result = search(&forest, &index, Namespace::Mt, "U5a1a1a", 3);
    match result {
        SearchResult::Found { ancestor, hops, .. } => {
            assert_eq!(ancestor, "U5a1");
            assert_eq!(hops, 3);
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn search_exhausts_after_max_attempts() {
    // Scenario D: three ancestor hops, no dataset match at any of them.
    let forest = Forest::bundled().unwrap();
    let index = y_dataset(&["J2a"]);
    let result = search(&forest, &index, Namespace::Y, "R1a1a1b1a1", 3);
    assert_eq!(
        result,
        SearchResult::Exhausted {
            last_candidate: "R1a1a1".to_string(),
            attempts: 3
        }
    );
}

#[test]
fn mt_exhaustion_reports_last_candidate() {
    let forest = Forest::bundled().unwrap();
    let index = mt_dataset(&[]);
    let result = search(&forest, &index, Namespace::Mt, "U5a1a1a", 3);
    assert_eq!(
        result,
        SearchResult::Exhausted {
            last_candidate: "U5a1".to_string(),
            attempts: 3
        }
    );
}

#[test]
fn mt_label_without_letter_group_is_malformed() {
    // Scenario E: resolution is never attempted.
    let forest = Forest::bundled().unwrap();
    let index = mt_dataset(&["U5a1"]);
    let result = search(&forest, &index, Namespace::Mt, "123abc", 3);
    assert_eq!(
        result,
        SearchResult::MalformedLabel {
            label: "123abc".to_string()
        }
    );
}

#[test]
fn empty_label_is_malformed_in_both_namespaces() {
    let forest = Forest::bundled().unwrap();
    let index = y_dataset(&[]);
    for namespace in [Namespace::Y, Namespace::Mt] {
        let result = search(&forest, &index, namespace, "", 3);
        assert!(matches!(result, SearchResult::MalformedLabel { .. }));
    }
}

#[test]
fn mt_unknown_letter_group_is_unresolvable() {
    // CZ is a trunk label, but CZ1 classifies into a sub-tree that does not
    // exist.
    let forest = Forest::bundled().unwrap();
    let index = mt_dataset(&[]);
    let result = search(&forest, &index, Namespace::Mt, "CZ1", 3);
    assert_eq!(
        result,
        SearchResult::Unresolvable {
            label: "CZ1".to_string(),
            reason: UnresolvableReason::UnknownSubtree("CZ".to_string())
        }
    );
}

#[test]
fn mt_orphan_label_is_unresolvable() {
    let forest = Forest::bundled().unwrap();
    let index = mt_dataset(&[]);
    let result = search(&forest, &index, Namespace::Mt, "U99", 3);
    assert_eq!(
        result,
        SearchResult::Unresolvable {
            label: "U99".to_string(),
            reason: UnresolvableReason::Orphan
        }
    );
}

#[test]
fn y_suffix_reduction_can_reach_the_main_trunk() {
    // R1 is off-trunk; its confirmed form R is a trunk member, so later hops
    // switch to explicit tree edges (R -> P1 -> P).
    let forest = Forest::bundled().unwrap();
    let index = y_dataset(&[]);
    let result = search(&forest, &index, Namespace::Y, "R1", 3);
    assert_eq!(
        result,
        SearchResult::Exhausted {
            last_candidate: "P".to_string(),
            attempts: 3
        }
    );
}

#[test]
fn y_trunk_parents_follow_the_reference_tree() {
    let forest = Forest::bundled().unwrap();
    for (child, parent) in [
        ("A1b", "A1"),
        ("BT", "A1b"),
        ("CT", "BT"),
        ("E", "DE"),
        ("K2b1", "K2b"),
        ("Q", "P1"),
        ("R", "P1"),
    ] {
        let index = y_dataset(&[parent]);
        let result = search(&forest, &index, Namespace::Y, child, 3);
        match result {
            SearchResult::Found { ancestor, hops, .. } => {
                assert_eq!(ancestor, parent, "parent of {}", child);
                assert_eq!(hops, 1);
            }
            other => panic!("expected Found for {}, got {:?}", child, other),
        }
    }
}

#[test]
fn search_is_idempotent_against_the_same_snapshot() {
    let forest = Forest::bundled().unwrap();
    let index = mt_dataset(&["U5a1", "H1"]);
    let first = search(&forest, &index, Namespace::Mt, "U5a1a1a", 3);
    let second = search(&forest, &index, Namespace::Mt, "U5a1a1a", 3);
    assert_eq!(first, second);
}

#[test]
fn hop_bound_is_respected_for_larger_limits() {
    let forest = Forest::bundled().unwrap();
    let index = y_dataset(&[]);
    // 6 hops up from R1a1a1b1a1 strips down to R1a, still off-trunk.
    let result = search(&forest, &index, Namespace::Y, "R1a1a1b1a1", 6);
    assert_eq!(
        result,
        SearchResult::Exhausted {
            last_candidate: "R1a".to_string(),
            attempts: 6
        }
    );
}

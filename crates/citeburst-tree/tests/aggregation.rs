//! End-to-end aggregation behavior over realistic record sets.

use citeburst_tree::{Citation, NodeKind, YearRange, build, filter, flatten, parent_path_ids};

fn cite(
    id: &str,
    name: &str,
    year: i32,
    pubs: u64,
    department: &str,
    faculty: &str,
    university: &str,
) -> Citation {
    Citation {
        id: id.into(),
        name: name.into(),
        year,
        pubs,
        department: department.into(),
        faculty: faculty.into(),
        university: university.into(),
    }
}

#[test]
fn two_record_reference_scenario() {
    let records = vec![
        cite("1", "A", 2020, 5, "CS", "Eng", "MIT"),
        cite("2", "B", 2021, 3, "CS", "Eng", "MIT"),
    ];
    let tree = build(&records).unwrap();

    assert_eq!(tree.root().value, 8);
    assert_eq!(tree.root().year_range, YearRange { min: 2020, max: 2021 });

    let university = tree.node("uMIT").unwrap();
    let faculty = tree.node("fEng").unwrap();
    let department = tree.node("dCS").unwrap();
    assert_eq!(university.value, 8);
    assert_eq!(faculty.value, 8);
    assert_eq!(department.value, 8);

    let leaves: Vec<u64> = department
        .child_ids()
        .iter()
        .map(|id| tree.node(id).unwrap().value)
        .collect();
    assert_eq!(leaves, [5, 3]);
}

#[test]
fn values_and_ranges_aggregate_bottom_up() {
    let records = vec![
        cite("1", "A", 2018, 4, "CS (CS)", "Engineering (Eng)", "MIT (MIT)"),
        cite("2", "B", 2022, 6, "EE (EE)", "Engineering (Eng)", "MIT (MIT)"),
        cite("3", "C", 2020, 1, "CS (CS)", "Engineering (Eng)", "MIT (MIT)"),
    ];
    let tree = build(&records).unwrap();

    // Every non-leaf value equals the sum of its children.
    for id in tree.ids() {
        let node = tree.node(id).unwrap();
        if node.is_leaf() {
            continue;
        }
        let child_sum: u64 = node
            .child_ids()
            .iter()
            .map(|c| tree.node(c).unwrap().value)
            .sum();
        assert_eq!(node.value, child_sum, "value mismatch at {id}");

        // Year range is the union of the children's ranges.
        let mut union = YearRange::EMPTY;
        for c in node.child_ids() {
            let child = tree.node(c).unwrap();
            union.widen(child.year_range.min);
            union.widen(child.year_range.max);
        }
        assert_eq!(node.year_range, union, "year range mismatch at {id}");
    }

    assert_eq!(tree.node("dCS").unwrap().year_range, YearRange { min: 2018, max: 2020 });
    assert_eq!(tree.root().year_range, YearRange { min: 2018, max: 2022 });
}

#[test]
fn depth_is_exactly_four_below_root() {
    let records = vec![
        cite("1", "A", 2020, 5, "CS", "Eng", "MIT"),
        cite("2", "B", 2019, 2, "Math", "Sci", "ETH"),
    ];
    let tree = build(&records).unwrap();
    for id in tree.ids() {
        let node = tree.node(id).unwrap();
        let depth = parent_path_ids(&tree, node).len();
        let expected = match node.kind {
            NodeKind::Root => 0,
            NodeKind::University => 1,
            NodeKind::Faculty => 2,
            NodeKind::Department => 3,
            NodeKind::Person => 4,
        };
        assert_eq!(depth, expected, "wrong depth for {id}");
        assert_eq!(node.is_leaf(), node.kind == NodeKind::Person);
    }
}

#[test]
fn selection_filter_then_flatten_pipeline() {
    let records = vec![
        cite("1", "A", 2020, 5, "CS", "Eng", "MIT"),
        cite("2", "B", 2021, 3, "CS", "Eng", "MIT"),
        cite("3", "C", 2019, 2, "Math", "Sci", "ETH"),
    ];
    let tree = build(&records).unwrap();

    // Keep only the MIT chain, then flatten for the chart.
    let keep = ["/", "uMIT", "fEng", "dCS", "p1_2020", "p2_2021"];
    let filtered = filter(&tree, tree.root_id(), |n| keep.contains(&n.id.as_str()))
        .unwrap()
        .unwrap();
    assert_eq!(filtered.len(), keep.len());

    let flat = flatten(&filtered, filtered.root_id()).unwrap();
    assert_eq!(flat.len(), keep.len());
    assert_eq!(flat[0].id, "/");
    assert!(flat.iter().all(|n| keep.contains(&n.id.as_str())));
}

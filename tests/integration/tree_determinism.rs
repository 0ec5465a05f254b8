use std::collections::HashSet;

use notetree::tree::{build, flatten, path, Forest, Node, TreeBuilder};
use notetree::types::Record;
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = &'static str> {
    // Few names so that duplicates and kind conflicts are common.
    prop::sample::select(vec!["a", "b", "c.md", "docs"])
}

fn record() -> impl Strategy<Value = Record> {
    (prop::collection::vec(segment(), 1..4), "[a-z]{0,4}")
        .prop_map(|(segments, content)| Record::new(segments.join("/"), content).unwrap())
}

fn record_list() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record(), 0..24)
}

/// Walk the forest computing full paths independently of the index.
fn collect_paths<'a>(nodes: &'a [Node], parent: Option<&str>, out: &mut Vec<(String, &'a Node)>) {
    for node in nodes {
        let full_path = path::join(parent, node.name());
        out.push((full_path.clone(), node));
        if let Some(children) = node.children() {
            collect_paths(children, Some(&full_path), out);
        }
    }
}

fn all_paths(forest: &Forest) -> Vec<(String, &Node)> {
    let mut out = Vec::new();
    collect_paths(forest.roots(), None, &mut out);
    out
}

proptest! {
    #[test]
    fn build_is_deterministic(records in record_list()) {
        prop_assert_eq!(build(&records), build(&records));
    }

    #[test]
    fn every_node_round_trips_through_the_index(records in record_list()) {
        let forest = build(&records);
        let index = flatten(&forest);
        let paths = all_paths(&forest);

        prop_assert_eq!(index.len(), paths.len());
        prop_assert_eq!(index.len(), forest.node_count());
        let unique: HashSet<&str> = paths.iter().map(|(p, _)| p.as_str()).collect();
        prop_assert_eq!(unique.len(), paths.len());
        for (full_path, node) in &paths {
            let found = index.get(full_path);
            prop_assert!(found.is_some());
            prop_assert!(std::ptr::eq(found.unwrap(), *node));
        }
    }

    #[test]
    fn rebuild_from_leaf_records_is_identical(records in record_list()) {
        let forest = build(&records);
        let rebuilt = build(&forest.leaf_records());
        prop_assert_eq!(rebuilt, forest);
    }

    #[test]
    fn accepted_records_resolve_to_their_content(records in record_list()) {
        let outcome = TreeBuilder::new().build_with_report(&records);
        let skipped: HashSet<usize> = outcome.skipped.iter().map(|s| s.index).collect();
        let index = flatten(&outcome.forest);

        for (i, record) in records.iter().enumerate() {
            if skipped.contains(&i) {
                continue;
            }
            let node = index.get(record.path());
            prop_assert!(node.is_some());
            prop_assert_eq!(node.and_then(Node::content), Some(record.content()));
        }
        prop_assert_eq!(
            outcome.forest.leaf_records().len() + outcome.skipped.len(),
            records.len()
        );
    }
}

use notetree::tree::{build, flatten, Node, SkipReason, TreeBuilder};

use super::support::records;

fn names(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(Node::name).collect()
}

#[test]
fn depth_is_preserved() {
    let forest = build(&records(&[("x/y/z.md", "C")]));

    assert_eq!(forest.roots().len(), 1);
    let x = &forest.roots()[0];
    assert_eq!(x.name(), "x");
    assert!(x.is_directory());

    let x_children = x.children().unwrap();
    assert_eq!(x_children.len(), 1);
    let y = &x_children[0];
    assert_eq!(y.name(), "y");
    assert!(y.is_directory());

    let y_children = y.children().unwrap();
    assert_eq!(y_children.len(), 1);
    let z = &y_children[0];
    assert_eq!(z.name(), "z.md");
    assert!(!z.is_directory());
    assert_eq!(z.content(), Some("C"));

    let index = flatten(&forest);
    assert!(std::ptr::eq(index.get("x").unwrap(), x));
    assert!(std::ptr::eq(index.get("x/y").unwrap(), y));
    assert!(std::ptr::eq(index.get("x/y/z.md").unwrap(), z));
    assert_eq!(index.len(), 3);
}

#[test]
fn siblings_keep_input_order() {
    let forest = build(&records(&[("b.md", "2"), ("a.md", "1")]));
    assert_eq!(names(forest.roots()), vec!["b.md", "a.md"]);
}

#[test]
fn first_write_wins() {
    let forest = build(&records(&[("a/b.md", "X"), ("a/b.md", "Y")]));
    let index = flatten(&forest);
    assert_eq!(index.get("a/b.md").and_then(Node::content), Some("X"));
    assert_eq!(forest.node_count(), 2);
}

#[test]
fn kind_conflicts_are_rejected_not_merged() {
    let outcome = TreeBuilder::new().build_with_report(&records(&[
        ("docs/guide", "as file"),
        ("docs/guide/intro.md", "rejected"),
        ("notes/2024/jan.md", "kept"),
        ("notes/2024", "rejected"),
        ("docs/other.md", "kept"),
    ]));

    let index = flatten(&outcome.forest);
    assert_eq!(index.get("docs/guide").and_then(Node::content), Some("as file"));
    assert!(index.get("docs/guide/intro.md").is_none());
    assert!(index.get("notes/2024").unwrap().is_directory());
    assert_eq!(
        names(index.get("docs").unwrap().children().unwrap()),
        vec!["guide", "other.md"]
    );

    let reasons: Vec<(usize, &SkipReason)> = outcome
        .skipped
        .iter()
        .map(|s| (s.index, &s.reason))
        .collect();
    assert_eq!(
        reasons,
        vec![
            (
                1,
                &SkipReason::LeafAsDirectory {
                    at: "docs/guide".to_string()
                }
            ),
            (3, &SkipReason::DirectoryAsLeaf),
        ]
    );
}

#[test]
fn names_are_not_normalized() {
    let forest = build(&records(&[
        ("Docs/a.md", "upper"),
        ("docs/a.md", "lower"),
        ("./b.md", "dot"),
        ("a\\b.md", "backslash"),
    ]));
    assert_eq!(names(forest.roots()), vec!["Docs", "docs", ".", "a\\b.md"]);

    let index = flatten(&forest);
    assert_eq!(index.get("Docs/a.md").and_then(Node::content), Some("upper"));
    assert_eq!(index.get("./b.md").and_then(Node::content), Some("dot"));
    assert!(index.get("b.md").is_none());
}

#[test]
fn empty_input_builds_empty_forest() {
    let forest = build(&[]);
    assert!(forest.is_empty());
    assert!(flatten(&forest).is_empty());
}

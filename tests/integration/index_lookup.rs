use notetree::catalog::Catalog;
use notetree::route::{encode_route, resolve_route};
use notetree::tree::{build, flatten, Lookup};

use super::support::records;

#[test]
fn miss_is_reported_as_absence() {
    let forest = build(&records(&[("a/b.md", "B")]));
    let index = flatten(&forest);
    assert!(index.get("nonexistent/path.md").is_none());
    assert_eq!(index.resolve("nonexistent/path.md"), Lookup::NotFound);
}

#[test]
fn lookup_is_exact_match() {
    let forest = build(&records(&[("a/b.md", "B")]));
    let index = flatten(&forest);
    for near_miss in ["a/b.md/", "/a/b.md", "A/b.md", "a/./b.md", "a//b.md", "a/B.md"] {
        assert!(index.get(near_miss).is_none(), "{near_miss} should not resolve");
    }
}

#[test]
fn routes_resolve_after_percent_decoding() {
    let catalog = Catalog::from_records(records(&[
        ("Meeting Notes/2024 #1.md", "first"),
        ("Meeting Notes/ümlaut.md", "second"),
    ]));
    let index = catalog.index();

    for (path, content) in [
        ("Meeting Notes/2024 #1.md", "first"),
        ("Meeting Notes/ümlaut.md", "second"),
    ] {
        let route = format!("#{}", encode_route(path));
        let found = resolve_route(&index, &route).node();
        assert_eq!(found.and_then(|n| n.content()), Some(content), "route {route}");
    }

    assert!(resolve_route(&index, "#Meeting%20Notes").node().unwrap().is_directory());
    assert_eq!(resolve_route(&index, "#"), Lookup::NotFound);
}

#[test]
fn paths_enumerate_in_pre_order() {
    let forest = build(&records(&[("b/2.md", ""), ("a.md", ""), ("b/1.md", "")]));
    let index = flatten(&forest);
    assert_eq!(
        index.paths().collect::<Vec<_>>(),
        vec!["b", "b/2.md", "b/1.md", "a.md"]
    );
}

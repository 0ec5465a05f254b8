//! Tree construction from an ordered record list
//!
//! Records are processed in input order. Intermediate segments become
//! directories the first time their path is seen, and every node is appended
//! to its parent (or the top level) in that first-discovery order.
//!
//! Collisions never abort a build:
//! - a second record with the same leaf path is skipped (first write wins);
//! - a record that would descend through an existing leaf, or place a leaf
//!   where a directory already exists, is rejected as a kind conflict.
//!
//! A rejected record contributes nothing: the walk is checked before any
//! node is created, so no directories are left behind by a rejection.

use crate::tree::node::{DirectoryNode, FileNode, Forest, Node};
use crate::tree::path;
use crate::types::Record;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// Why a record did not produce a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// A leaf already exists at the same full path
    Duplicate,
    /// An ancestor segment was already created as a leaf
    LeafAsDirectory { at: String },
    /// The full path was already created as a directory
    DirectoryAsLeaf,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Duplicate => write!(f, "duplicate path"),
            SkipReason::LeafAsDirectory { at } => {
                write!(f, "{} is a file and cannot contain entries", at)
            }
            SkipReason::DirectoryAsLeaf => write!(f, "path is already a directory"),
        }
    }
}

/// A record left out of the forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Position in the input sequence
    pub index: usize,
    pub path: String,
    pub reason: SkipReason,
}

/// Result of a build: the forest plus every record that was left out
#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
    pub forest: Forest,
    pub skipped: Vec<SkippedRecord>,
}

/// Arena slot used while the tree is under construction
enum Slot {
    File { name: String, content: String },
    Directory { name: String, children: Vec<usize> },
}

/// Construction state for a single build; dropped when the build returns.
#[derive(Default)]
struct Arena {
    slots: Vec<Slot>,
    roots: Vec<usize>,
    by_path: HashMap<String, usize>,
}

impl Arena {
    fn is_file(&self, full_path: &str) -> Option<bool> {
        self.by_path
            .get(full_path)
            .map(|&idx| matches!(self.slots[idx], Slot::File { .. }))
    }

    /// Check a record against existing nodes without changing anything.
    fn check(&self, prefixes: &[String]) -> Option<SkipReason> {
        let (leaf_path, ancestors) = prefixes.split_last()?;
        for ancestor in ancestors {
            match self.is_file(ancestor) {
                Some(true) => {
                    return Some(SkipReason::LeafAsDirectory {
                        at: ancestor.clone(),
                    })
                }
                Some(false) => {}
                // Nothing below a missing directory can exist either.
                None => return None,
            }
        }
        match self.is_file(leaf_path) {
            Some(true) => Some(SkipReason::Duplicate),
            Some(false) => Some(SkipReason::DirectoryAsLeaf),
            None => None,
        }
    }

    fn attach(&mut self, parent: Option<usize>, slot: Slot, full_path: String) -> usize {
        let idx = self.slots.len();
        self.slots.push(slot);
        match parent.map(|p| &mut self.slots[p]) {
            Some(Slot::Directory { children, .. }) => children.push(idx),
            _ => self.roots.push(idx),
        }
        self.by_path.insert(full_path, idx);
        idx
    }

    fn insert(&mut self, segments: &[&str], prefixes: Vec<String>, content: &str) {
        let mut parent = None;
        let last = prefixes.len() - 1;
        for (i, full_path) in prefixes.into_iter().enumerate() {
            if let Some(&existing) = self.by_path.get(&full_path) {
                parent = Some(existing);
                continue;
            }
            let name = segments[i].to_string();
            let slot = if i == last {
                Slot::File {
                    name,
                    content: content.to_string(),
                }
            } else {
                Slot::Directory {
                    name,
                    children: Vec::new(),
                }
            };
            parent = Some(self.attach(parent, slot, full_path));
        }
    }

    fn into_forest(self) -> Forest {
        fn freeze(slots: &mut [Option<Slot>], idx: usize) -> Option<Node> {
            match slots.get_mut(idx)?.take()? {
                Slot::File { name, content } => Some(Node::File(FileNode { name, content })),
                Slot::Directory { name, children } => {
                    let children = children
                        .into_iter()
                        .filter_map(|child| freeze(slots, child))
                        .collect();
                    Some(Node::Directory(DirectoryNode { name, children }))
                }
            }
        }

        let mut slots: Vec<Option<Slot>> = self.slots.into_iter().map(Some).collect();
        Forest(
            self.roots
                .into_iter()
                .filter_map(|root| freeze(&mut slots, root))
                .collect(),
        )
    }
}

/// Builds forests from ordered record lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder
    }

    /// Build a forest, discarding the skip report.
    pub fn build(&self, records: &[Record]) -> Forest {
        self.build_with_report(records).forest
    }

    /// Build a forest and report every record that was left out.
    pub fn build_with_report(&self, records: &[Record]) -> BuildOutcome {
        let mut arena = Arena::default();
        let mut skipped = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let segments: Vec<&str> = record.segments().collect();
            let mut prefixes: Vec<String> = Vec::with_capacity(segments.len());
            for segment in &segments {
                let full_path = path::join(prefixes.last().map(String::as_str), segment);
                prefixes.push(full_path);
            }

            if let Some(reason) = arena.check(&prefixes) {
                warn!(index, path = record.path(), %reason, "Skipping record");
                skipped.push(SkippedRecord {
                    index,
                    path: record.path().to_string(),
                    reason,
                });
                continue;
            }
            arena.insert(&segments, prefixes, record.content());
        }

        let node_count = arena.slots.len();
        let forest = arena.into_forest();
        debug!(
            records = records.len(),
            nodes = node_count,
            roots = forest.roots().len(),
            skipped = skipped.len(),
            "Built forest"
        );
        BuildOutcome { forest, skipped }
    }
}

/// Build a forest from records in order.
pub fn build(records: &[Record]) -> Forest {
    TreeBuilder::new().build(records)
}

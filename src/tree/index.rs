//! Full-path index over a built forest
//!
//! The index borrows the forest it was built from, so every lookup returns
//! the node stored in that forest. A changed forest needs a fresh index.

use crate::tree::node::{Forest, Node};
use crate::tree::path;
use std::collections::HashMap;

/// Outcome of resolving a full path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Node),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn node(self) -> Option<&'a Node> {
        match self {
            Lookup::Found(node) => Some(node),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Map from full path to node
#[derive(Debug, Clone, Default)]
pub struct FlatIndex<'a> {
    nodes: HashMap<String, &'a Node>,
    /// Keys in depth-first pre-order, for listing
    order: Vec<String>,
}

impl<'a> FlatIndex<'a> {
    pub fn get(&self, full_path: &str) -> Option<&'a Node> {
        self.nodes.get(full_path).copied()
    }

    pub fn resolve(&self, full_path: &str) -> Lookup<'a> {
        match self.get(full_path) {
            Some(node) => Lookup::Found(node),
            None => Lookup::NotFound,
        }
    }

    pub fn contains(&self, full_path: &str) -> bool {
        self.nodes.contains_key(full_path)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Full paths in depth-first pre-order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(full_path, node)` pairs in depth-first pre-order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &'a Node)> + '_ {
        self.order
            .iter()
            .filter_map(|p| self.nodes.get(p).map(|node| (p.as_str(), *node)))
    }
}

/// Index every node reachable from `forest` by its full path.
pub fn flatten(forest: &Forest) -> FlatIndex<'_> {
    fn traverse<'a>(nodes: &'a [Node], parent: Option<&str>, index: &mut FlatIndex<'a>) {
        for node in nodes {
            let full_path = path::join(parent, node.name());
            index.nodes.insert(full_path.clone(), node);
            index.order.push(full_path.clone());
            if let Some(children) = node.children() {
                traverse(children, Some(&full_path), index);
            }
        }
    }

    let mut index = FlatIndex {
        nodes: HashMap::with_capacity(forest.node_count()),
        order: Vec::new(),
    };
    traverse(forest.roots(), None, &mut index);
    index
}

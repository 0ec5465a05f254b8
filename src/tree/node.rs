//! Tree node types

use crate::tree::path;
use crate::types::Record;
use serde::ser::{Serialize, Serializer};

/// Leaf node created directly from a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub content: String,
}

/// Directory node synthesized from an intermediate path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub name: String,
    pub children: Vec<Node>, // first-discovery order, never sorted
}

/// Tree node: a leaf or a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(FileNode),
    Directory(DirectoryNode),
}

impl Node {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Node::File(FileNode {
            name: name.into(),
            content: content.into(),
        })
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Node::Directory(DirectoryNode {
            name: name.into(),
            children: Vec::new(),
        })
    }

    /// Last path segment this node represents
    pub fn name(&self) -> &str {
        match self {
            Node::File(f) => &f.name,
            Node::Directory(d) => &d.name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Leaf content; None for directories
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File(f) => Some(&f.content),
            Node::Directory(_) => None,
        }
    }

    /// Directory children; None for leaves
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::File(_) => None,
            Node::Directory(d) => Some(&d.children),
        }
    }

    /// Number of nodes in this subtree, including this node
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children()
            .map(|children| children.iter().map(Node::subtree_len).sum())
            .unwrap_or(0)
    }
}

#[derive(serde::Serialize)]
struct NodeJson<'a> {
    name: &'a str,
    is_dir: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a [Node]>,
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeJson {
            name: self.name(),
            is_dir: self.is_directory(),
            content: self.content(),
            children: self.children(),
        }
        .serialize(serializer)
    }
}

/// Ordered top-level nodes of a built tree
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Forest(pub(crate) Vec<Node>);

impl Forest {
    pub fn new() -> Self {
        Forest(Vec::new())
    }

    pub fn roots(&self) -> &[Node] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of nodes reachable from the top level
    pub fn node_count(&self) -> usize {
        self.0.iter().map(Node::subtree_len).sum()
    }

    /// Leaf records in depth-first pre-order, paths rebuilt from node names.
    ///
    /// Building a forest from these records yields a forest equal to `self`.
    pub fn leaf_records(&self) -> Vec<Record> {
        fn collect(nodes: &[Node], parent: Option<&str>, out: &mut Vec<Record>) {
            for node in nodes {
                let full_path = path::join(parent, node.name());
                match node {
                    Node::File(f) => out.push(Record::from_node_path(full_path, f.content.clone())),
                    Node::Directory(d) => collect(&d.children, Some(&full_path), out),
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.0, None, &mut out);
        out
    }
}

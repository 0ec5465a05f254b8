//! Directory tree construction and full-path lookup.

pub mod builder;
pub mod index;
pub mod node;
pub mod path;

pub use builder::{build, BuildOutcome, SkipReason, SkippedRecord, TreeBuilder};
pub use index::{flatten, FlatIndex, Lookup};
pub use node::{DirectoryNode, FileNode, Forest, Node};

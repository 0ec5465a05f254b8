//! Notetree: directory trees for archived document collections
//!
//! Builds a deterministic forest of directory and file nodes from a flat,
//! ordered list of `(path, content)` records, and indexes every node by its
//! full `/`-joined path for constant-time lookup.
//!
//! ```
//! use notetree::tree::{build, flatten};
//! use notetree::types::Record;
//!
//! let records = vec![Record::new("x/y/z.md", "C").unwrap()];
//! let forest = build(&records);
//! let index = flatten(&forest);
//! assert_eq!(index.get("x/y/z.md").and_then(|n| n.content()), Some("C"));
//! assert!(index.get("x/missing.md").is_none());
//! ```

pub mod archive;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod route;
pub mod store;
pub mod tooling;
pub mod tree;
pub mod types;

pub use error::{NotetreeError, Result};

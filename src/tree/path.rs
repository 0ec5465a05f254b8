//! Full-path addressing shared by the builder, the index, and routing.
//!
//! A node's full path is its own name at the top level, and
//! `parent_full_path + "/" + name` below that. Paths compare by exact string
//! equality: no case-folding, no `.`/`..` handling, no trailing-slash stripping.

use crate::error::{NotetreeError, Result};

/// Segment separator for record paths
pub const SEPARATOR: char = '/';

/// Split a record path into its segments.
///
/// Fails when the path is empty or any segment is empty (leading, trailing,
/// or doubled separator).
pub fn split_segments(path: &str) -> Result<Vec<&str>> {
    if path.is_empty() {
        return Err(NotetreeError::invalid_path(path, "path is empty"));
    }
    let segments: Vec<&str> = path.split(SEPARATOR).collect();
    if let Some(index) = segments.iter().position(|s| s.is_empty()) {
        return Err(NotetreeError::invalid_path(
            path,
            format!("segment {} is empty", index),
        ));
    }
    Ok(segments)
}

/// Full path of a node named `name` under `parent` (None at the top level).
pub fn join(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) if !parent.is_empty() => {
            let mut path = String::with_capacity(parent.len() + 1 + name.len());
            path.push_str(parent);
            path.push(SEPARATOR);
            path.push_str(name);
            path
        }
        _ => name.to_string(),
    }
}

//! Core types for record ingestion.

use crate::error::{NotetreeError, Result};
use crate::tree::path;
use serde::{Deserialize, Serialize};

/// A validated `(path, content)` pair taken from an archive listing.
///
/// The path is non-empty and every `/`-separated segment is non-empty; the
/// only ways to obtain a `Record` run that check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    path: String,
    content: String,
}

/// Unvalidated wire shape of a record
#[derive(Deserialize)]
struct RawRecord {
    path: String,
    content: String,
}

impl TryFrom<RawRecord> for Record {
    type Error = NotetreeError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        Record::new(raw.path, raw.content)
    }
}

impl Record {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        let path = path.into();
        path::split_segments(&path)?;
        Ok(Record {
            path,
            content: content.into(),
        })
    }

    /// Build a record whose path was produced by joining existing node names.
    pub(crate) fn from_node_path(path: String, content: String) -> Self {
        Record { path, content }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Segments of the path; never empty, no segment empty.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split(path::SEPARATOR)
    }
}

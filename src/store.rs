//! Record-set snapshots
//!
//! Persists the ingested record set so a later session can rebuild the same
//! forest without the original archive. Only records are stored; the forest
//! and index are always rebuilt from them.

use crate::error::{NotetreeError, Result};
use crate::types::Record;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk snapshot of a record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    /// Seconds since the Unix epoch at save time
    pub last_uploaded: u64,
    pub records: Vec<Record>,
}

impl Snapshot {
    pub fn new(records: Vec<Record>) -> Self {
        let last_uploaded = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            version: SNAPSHOT_VERSION,
            last_uploaded,
            records,
        }
    }
}

/// Record-set store interface
pub trait RecordStore {
    /// Load the stored snapshot; Ok(None) when nothing has been saved.
    fn load(&self) -> Result<Option<Snapshot>>;
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
    /// Remove the stored snapshot; succeeds when nothing is stored.
    fn clear(&self) -> Result<()>;
}

/// Snapshot stored as a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot: Snapshot = serde_json::from_slice(&data).map_err(|e| {
            NotetreeError::Snapshot(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(NotetreeError::Snapshot(format!(
                "Unsupported snapshot version {} in {}",
                snapshot.version,
                self.path.display()
            )));
        }
        debug!(path = %self.path.display(), records = snapshot.records.len(), "Loaded snapshot");
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write to a sibling file first so a failed save keeps the old snapshot.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(snapshot)?)?;
        std::fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), records = snapshot.records.len(), "Saved snapshot");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Cleared snapshot");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

//! StoreConfig and snapshot path resolution.

use crate::config::xdg;
use crate::error::NotetreeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Snapshot storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Snapshot file; None means `$XDG_DATA_HOME/notetree/records.json`
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

impl StoreConfig {
    /// Resolve the snapshot file location, explicit path first.
    pub fn resolve_snapshot_path(&self) -> Result<PathBuf, NotetreeError> {
        match &self.snapshot_path {
            Some(path) if !path.as_os_str().is_empty() => Ok(path.clone()),
            _ => Ok(xdg::notetree_data_dir()?.join("records.json")),
        }
    }
}

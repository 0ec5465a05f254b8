//! Configuration: defaults, global file, explicit file, and NOTETREE_* environment.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;
mod storage_paths;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;
pub use storage_paths::StoreConfig;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotetreeConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub archive: ArchiveConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

fn default_max_entry_bytes() -> u64 {
    8 * 1024 * 1024
}

/// Archive ingestion limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Entries larger than this (uncompressed) are skipped
    #[serde(default = "default_max_entry_bytes")]
    pub max_entry_bytes: u64,

    /// Skip entries that are not valid UTF-8 instead of decoding lossily
    #[serde(default)]
    pub strict_utf8: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            max_entry_bytes: default_max_entry_bytes(),
            strict_utf8: false,
        }
    }
}

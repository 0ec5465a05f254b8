//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::NotetreeConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<NotetreeConfig, ConfigError> {
        MergeService::load()
    }

    /// Load configuration from a specific file, in place of the global file.
    pub fn load_from_file(path: &Path) -> Result<NotetreeConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Load from `path` when given, otherwise from the standard sources.
    pub fn load_optional(path: Option<&Path>) -> Result<NotetreeConfig, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }
}

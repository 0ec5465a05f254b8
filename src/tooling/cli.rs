//! CLI Tooling
//!
//! Command-line interface over the catalog: import an archive, then browse
//! the stored record set as a tree, a listing, or a single selected path.

use crate::archive::ArchiveReader;
use crate::catalog::Catalog;
use crate::config::NotetreeConfig;
use crate::error::NotetreeError;
use crate::logging::LoggingConfig;
use crate::render::{
    format_import_summary_text, format_path_listing_text, format_selection_text, path_rows,
    render_tree_text, ImportSummary,
};
use crate::route::{decode_route, resolve_route};
use crate::store::{JsonFileStore, RecordStore};
use crate::tree::Lookup;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// Notetree CLI - browse archived document collections as a tree
#[derive(Parser)]
#[command(name = "notetree")]
#[command(about = "Build directory trees from archived documents and look up entries by path")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Snapshot file (overrides store.snapshot_path)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold logging flags over the configured logging section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read a zip archive and replace the stored record set
    Import {
        /// Path to the .zip archive
        archive: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the directory tree of the stored record set
    Tree {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the entry selected by a route (leading '#' optional, percent-encoded)
    Show {
        route: String,
    },
    /// List every indexed path
    Ls {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Delete the stored record set
    Clear,
}

/// CLI context: resolved configuration and the snapshot store
pub struct CliContext {
    config: NotetreeConfig,
    store: JsonFileStore,
}

impl CliContext {
    /// Create a CLI context from loaded configuration.
    ///
    /// `snapshot_path`, when given, replaces `store.snapshot_path`.
    pub fn new(
        mut config: NotetreeConfig,
        snapshot_path: Option<PathBuf>,
    ) -> Result<Self, NotetreeError> {
        if snapshot_path.is_some() {
            config.store.snapshot_path = snapshot_path;
        }
        let store = JsonFileStore::new(config.store.resolve_snapshot_path()?);
        Ok(Self { config, store })
    }

    pub fn store(&self) -> &JsonFileStore {
        &self.store
    }

    /// Execute a CLI command and return its output
    pub fn execute(&self, command: &Commands) -> Result<String, NotetreeError> {
        match command {
            Commands::Import { archive, format } => self.import(archive, format),
            Commands::Tree { format } => {
                let catalog = self.restore()?;
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(catalog.forest())?),
                    "text" => Ok(render_tree_text(catalog.forest())),
                    other => Err(invalid_format(other)),
                }
            }
            Commands::Show { route } => {
                let catalog = self.restore()?;
                let index = catalog.index();
                match resolve_route(&index, route) {
                    Lookup::Found(node) => {
                        let full_path = decode_route(route).unwrap_or_default();
                        Ok(format_selection_text(&full_path, Some(node)))
                    }
                    Lookup::NotFound => Ok(format_selection_text("", None)),
                }
            }
            Commands::Ls { format } => {
                let catalog = self.restore()?;
                let rows = path_rows(&catalog.index());
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&json!({
                        "paths": rows,
                        "total": rows.len(),
                    }))?),
                    "text" => Ok(format_path_listing_text(&rows)),
                    other => Err(invalid_format(other)),
                }
            }
            Commands::Clear => {
                self.store.clear()?;
                Ok(format!("Cleared {}", self.store.path().display()))
            }
        }
    }

    fn import(&self, archive: &Path, format: &str) -> Result<String, NotetreeError> {
        if format != "text" && format != "json" {
            return Err(invalid_format(format));
        }
        let extracted = ArchiveReader::new(self.config.archive.clone()).read_path(archive)?;
        let catalog = Catalog::from_records(extracted.records);
        catalog.persist(&self.store)?;
        info!(archive = %archive.display(), "Import complete");

        let summary = ImportSummary {
            archive: archive.display().to_string(),
            snapshot: self.store.path().display().to_string(),
            records: catalog.records().len(),
            nodes: catalog.forest().node_count(),
            skipped_entries: extracted.skipped,
            skipped_records: catalog.skipped().to_vec(),
        };
        if format == "json" {
            Ok(serde_json::to_string_pretty(&summary)?)
        } else {
            Ok(format_import_summary_text(&summary))
        }
    }

    fn restore(&self) -> Result<Catalog, NotetreeError> {
        let mut catalog = Catalog::new();
        catalog.restore(&self.store)?;
        Ok(catalog)
    }
}

fn invalid_format(format: &str) -> NotetreeError {
    NotetreeError::ConfigError(format!(
        "Invalid output format: {} (must be 'text' or 'json')",
        format
    ))
}

//! Zip archive ingestion
//!
//! Turns an archive's file listing into validated records, in archive order.
//! Directory entries are dropped; oversized, undecodable, or malformed
//! entries are skipped and reported so the rest of the archive still loads.

use crate::config::ArchiveConfig;
use crate::error::{NotetreeError, Result};
use crate::types::Record;
use serde::Serialize;
use std::fmt;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{debug, info, warn};

/// Upper bound on the buffer reserved before reading an entry
const PREALLOCATE_LIMIT: u64 = 64 * 1024;

/// Why an archive entry did not become a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntrySkipReason {
    TooLarge { size: u64, limit: u64 },
    NotUtf8,
    InvalidPath { reason: String },
}

impl fmt::Display for EntrySkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrySkipReason::TooLarge { size, limit } => {
                write!(f, "entry is {} bytes, limit is {}", size, limit)
            }
            EntrySkipReason::NotUtf8 => write!(f, "entry is not valid UTF-8"),
            EntrySkipReason::InvalidPath { reason } => write!(f, "{}", reason),
        }
    }
}

/// An archive entry left out of the record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: EntrySkipReason,
}

/// Records read from an archive plus the entries that were skipped
#[derive(Debug, Clone, Default)]
pub struct ExtractOutcome {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedEntry>,
}

/// Reads zip archives into records
#[derive(Debug, Clone, Default)]
pub struct ArchiveReader {
    config: ArchiveConfig,
}

impl ArchiveReader {
    pub fn new(config: ArchiveConfig) -> Self {
        Self { config }
    }

    /// Read the archive at `path`.
    pub fn read_path(&self, path: &Path) -> Result<ExtractOutcome> {
        let file = std::fs::File::open(path).map_err(|e| {
            NotetreeError::Archive(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let outcome = self.read(std::io::BufReader::new(file))?;
        info!(
            archive = %path.display(),
            records = outcome.records.len(),
            skipped = outcome.skipped.len(),
            "Read archive"
        );
        Ok(outcome)
    }

    /// Read an archive from any seekable source.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<ExtractOutcome> {
        let mut archive = zip::ZipArchive::new(reader)
            .map_err(|e| NotetreeError::Archive(format!("Invalid ZIP archive: {}", e)))?;
        let mut outcome = ExtractOutcome::default();

        for i in 0..archive.len() {
            let mut entry = archive
                .by_index(i)
                .map_err(|e| NotetreeError::Archive(format!("ZIP read error: {}", e)))?;
            let name = entry.name().to_string();

            if entry.is_dir() {
                debug!(entry = %name, "Skipping directory entry");
                continue;
            }

            let limit = self.config.max_entry_bytes;
            if entry.size() > limit {
                let reason = EntrySkipReason::TooLarge {
                    size: entry.size(),
                    limit,
                };
                outcome.skip(name, reason);
                continue;
            }

            // Declared sizes come from the archive header and are not trusted.
            let mut bytes = Vec::with_capacity(entry.size().min(PREALLOCATE_LIMIT) as usize);
            (&mut entry)
                .take(limit.saturating_add(1))
                .read_to_end(&mut bytes)
                .map_err(|e| NotetreeError::Archive(format!("Failed to read {}: {}", name, e)))?;
            if bytes.len() as u64 > limit {
                let reason = EntrySkipReason::TooLarge {
                    size: bytes.len() as u64,
                    limit,
                };
                outcome.skip(name, reason);
                continue;
            }

            let content = match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(_) if self.config.strict_utf8 => {
                    outcome.skip(name, EntrySkipReason::NotUtf8);
                    continue;
                }
                Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
            };

            match Record::new(name.clone(), content) {
                Ok(record) => outcome.records.push(record),
                Err(NotetreeError::InvalidPath { reason, .. }) => {
                    outcome.skip(name, EntrySkipReason::InvalidPath { reason });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(outcome)
    }
}

impl ExtractOutcome {
    fn skip(&mut self, name: String, reason: EntrySkipReason) {
        warn!(entry = %name, %reason, "Skipping archive entry");
        self.skipped.push(SkippedEntry { name, reason });
    }
}

//! Catalog: the current record set and the forest built from it.
//!
//! Every ingestion replaces the record set and rebuilds the forest from
//! scratch; clearing drops both. Indexes borrow the catalog, so an index can
//! never observe a forest that has since been replaced.

use crate::error::Result;
use crate::store::{RecordStore, Snapshot};
use crate::tree::{flatten, FlatIndex, Forest, SkippedRecord, TreeBuilder};
use crate::types::Record;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
    forest: Forest,
    skipped: Vec<SkippedRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        let mut catalog = Self::new();
        catalog.load(records);
        catalog
    }

    /// Replace the record set and rebuild the forest.
    pub fn load(&mut self, records: Vec<Record>) {
        let outcome = TreeBuilder::new().build_with_report(&records);
        info!(
            records = records.len(),
            nodes = outcome.forest.node_count(),
            skipped = outcome.skipped.len(),
            "Catalog loaded"
        );
        self.records = records;
        self.forest = outcome.forest;
        self.skipped = outcome.skipped;
    }

    /// Load the record set saved in `store`. Returns false when the store is empty.
    pub fn restore<S: RecordStore>(&mut self, store: &S) -> Result<bool> {
        match store.load()? {
            Some(snapshot) => {
                self.load(snapshot.records);
                Ok(true)
            }
            None => {
                self.clear();
                Ok(false)
            }
        }
    }

    /// Save the current record set to `store`.
    pub fn persist<S: RecordStore>(&self, store: &S) -> Result<()> {
        store.save(&Snapshot::new(self.records.clone()))
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.forest = Forest::new();
        self.skipped.clear();
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Records the last build left out
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    /// Fresh full-path index over the current forest
    pub fn index(&self) -> FlatIndex<'_> {
        flatten(&self.forest)
    }
}

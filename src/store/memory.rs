//! In-process store for tests and dry runs.

use issue_arcade_engine::{BoardSnapshot, Variant};
use tracing::{debug, instrument};

use super::{StateStore, Stats, StoreError};

/// Keeps the snapshot and stats in memory and counts writes.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    variant: Variant,
    snapshot: Option<BoardSnapshot>,
    stats: Option<Stats>,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty store for a variant.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            snapshot: None,
            stats: None,
            writes: 0,
        }
    }

    /// Creates a store already holding a snapshot.
    pub fn with_snapshot(snapshot: BoardSnapshot) -> Self {
        Self {
            variant: snapshot.variant(),
            snapshot: Some(snapshot),
            stats: None,
            writes: 0,
        }
    }

    /// The stored snapshot, if any was saved or seeded.
    pub fn snapshot(&self) -> Option<&BoardSnapshot> {
        self.snapshot.as_ref()
    }

    /// Number of `save` and `save_stats` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<BoardSnapshot, StoreError> {
        Ok(self
            .snapshot
            .clone()
            .unwrap_or_else(|| BoardSnapshot::new(self.variant)))
    }

    fn save(&mut self, snapshot: &BoardSnapshot) -> Result<(), StoreError> {
        debug!(move_count = snapshot.move_count(), "Snapshot kept in memory");
        self.snapshot = Some(snapshot.clone());
        self.writes += 1;
        Ok(())
    }

    fn load_stats(&self) -> Result<Stats, StoreError> {
        Ok(self.stats.clone().unwrap_or_default())
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError> {
        self.stats = Some(stats.clone());
        self.writes += 1;
        Ok(())
    }
}

//! Durable storage for board snapshots and play statistics.

mod error;
mod json;
mod memory;
mod stats;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use stats::Stats;

use issue_arcade_engine::BoardSnapshot;

/// Persistence of one board snapshot and one statistics record.
///
/// Loading a record that was never saved is the initialisation path, not an
/// error: implementations return a fresh snapshot or zeroed stats.
pub trait StateStore {
    /// Loads the current snapshot, or a fresh one if none was saved.
    fn load(&self) -> Result<BoardSnapshot, StoreError>;

    /// Replaces the stored snapshot.
    fn save(&mut self, snapshot: &BoardSnapshot) -> Result<(), StoreError>;

    /// Loads the statistics record, or zeroed stats if none was saved.
    fn load_stats(&self) -> Result<Stats, StoreError>;

    /// Replaces the stored statistics record.
    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError>;
}

//! JSON-file backed store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use derive_getters::Getters;
use issue_arcade_engine::{BoardSnapshot, InvariantSet, SnapshotInvariants, Variant};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::{StateStore, Stats, StoreError};
use crate::config::VariantConfig;

/// Stores a snapshot and a stats record as pretty-printed JSON files.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so readers never observe a half-written record.
#[derive(Debug, Clone, Getters)]
pub struct JsonFileStore {
    variant: Variant,
    state_path: PathBuf,
    stats_path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for `variant` backed by the given files.
    #[instrument(skip(state_path, stats_path), fields(state = %state_path.as_ref().display()))]
    pub fn new(variant: Variant, state_path: impl AsRef<Path>, stats_path: impl AsRef<Path>) -> Self {
        info!(%variant, "Creating JsonFileStore");
        Self {
            variant,
            state_path: state_path.as_ref().to_path_buf(),
            stats_path: stats_path.as_ref().to_path_buf(),
        }
    }

    /// Creates a store from a variant's configured file paths.
    pub fn from_config(config: &VariantConfig) -> Self {
        Self::new(*config.variant(), config.state_file(), config.stats_file())
    }
}

/// Reads and decodes a JSON file. `Ok(None)` when the file does not exist.
#[instrument]
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No record on disk");
            return Ok(None);
        }
        Err(e) => {
            return Err(StoreError::new(format!(
                "Failed to read '{}': {}",
                path.display(),
                e
            )));
        }
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| StoreError::new(format!("Failed to parse '{}': {}", path.display(), e)))
}

/// Encodes `value` and swaps it into place through a temporary sibling file.
#[instrument(skip(value))]
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path.file_name().map(|n| n.to_os_string()).ok_or_else(|| {
        StoreError::new(format!("'{}' does not name a file", path.display()))
    })?;
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    debug!("Record written");
    Ok(())
}

impl StateStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.state_path.display()))]
    fn load(&self) -> Result<BoardSnapshot, StoreError> {
        let Some(snapshot) = read_json::<BoardSnapshot>(&self.state_path)? else {
            info!(variant = %self.variant, "No saved game, starting fresh");
            return Ok(BoardSnapshot::new(self.variant));
        };

        if snapshot.variant() != self.variant {
            return Err(StoreError::new(format!(
                "'{}' holds a {} game, expected {}",
                self.state_path.display(),
                snapshot.variant(),
                self.variant
            )));
        }

        if let Err(violations) = SnapshotInvariants::check_all(&snapshot) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Stored snapshot is inconsistent");
            return Err(StoreError::new(format!(
                "'{}' is inconsistent: {}",
                self.state_path.display(),
                descriptions
            )));
        }

        debug!(move_count = snapshot.move_count(), "Snapshot restored");
        Ok(snapshot)
    }

    #[instrument(skip(self, snapshot), fields(path = %self.state_path.display()))]
    fn save(&mut self, snapshot: &BoardSnapshot) -> Result<(), StoreError> {
        write_json(&self.state_path, snapshot)?;
        info!(move_count = snapshot.move_count(), status = ?snapshot.status(), "Snapshot saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.stats_path.display()))]
    fn load_stats(&self) -> Result<Stats, StoreError> {
        Ok(read_json::<Stats>(&self.stats_path)?.unwrap_or_default())
    }

    #[instrument(skip(self, stats), fields(path = %self.stats_path.display()))]
    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError> {
        write_json(&self.stats_path, stats)?;
        info!(total_moves = stats.total_moves(), "Stats saved");
        Ok(())
    }
}

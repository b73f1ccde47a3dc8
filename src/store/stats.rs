//! Running play statistics, kept beside the snapshot.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// Totals across every game played on one board.
///
/// Missing keys in a stored record default to zero or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    /// Accepted moves, all games.
    total_moves: u64,
    /// Games that ended in a win or a draw.
    completed_games: u64,
    /// Distinct player identities ever supplied with a move.
    #[serde(rename = "total_players")]
    players: BTreeSet<String>,
}

impl Stats {
    /// Counts one accepted move and remembers its author.
    #[instrument(skip(self))]
    pub fn record_move(&mut self, author: Option<&str>) {
        self.total_moves += 1;
        if let Some(author) = author.map(str::trim).filter(|a| !a.is_empty()) {
            self.players.insert(author.to_string());
        }
    }

    /// Counts one finished game.
    #[instrument(skip(self))]
    pub fn record_completion(&mut self) {
        self.completed_games += 1;
    }

    /// Number of distinct players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

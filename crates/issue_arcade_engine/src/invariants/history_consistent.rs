//! History consistency invariant: the history explains every mark on the board.

use super::super::{BoardSnapshot, Square};
use super::Invariant;

/// Invariant: history matches the board.
///
/// - `move_count` equals the history length,
/// - move numbers run 1, 2, 3, ...,
/// - each record's cell holds that record's player,
/// - no cell is filled without a record and no cell is recorded twice.
pub struct HistoryConsistentInvariant;

impl Invariant<BoardSnapshot> for HistoryConsistentInvariant {
    fn holds(snapshot: &BoardSnapshot) -> bool {
        let history = snapshot.history();

        if snapshot.move_count() as usize != history.len() {
            return false;
        }

        let numbered = history
            .iter()
            .enumerate()
            .all(|(i, record)| record.move_number as usize == i + 1);

        let placed = history
            .iter()
            .all(|record| snapshot.cells().get(record.cell) == Some(Square::Occupied(record.player)));

        numbered && placed && snapshot.cells().occupied_count() == history.len()
    }

    fn description() -> &'static str {
        "History length matches move count and occupied squares"
    }
}

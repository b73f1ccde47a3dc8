//! Alternating turn invariant: the first player opens and players alternate.

use super::super::{BoardSnapshot, GameStatus};
use super::Invariant;

/// Invariant: players alternate and the turn marker agrees with the status.
///
/// History must read First, Second, First, ... While the game is in progress
/// the turn belongs to whoever did not move last; a winner keeps the turn and
/// must be the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<BoardSnapshot> for AlternatingTurnInvariant {
    fn holds(snapshot: &BoardSnapshot) -> bool {
        let history = snapshot.history();
        let opener = snapshot.variant().starting_player();

        if history.first().is_some_and(|record| record.player != opener) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let last = history.last().map(|record| record.player);
        match snapshot.status() {
            GameStatus::InProgress => {
                snapshot.turn() == last.map_or(opener, |player| player.opponent())
            }
            GameStatus::Won(winner) => last == Some(*winner) && snapshot.turn() == *winner,
            GameStatus::Draw => last.is_some(),
        }
    }

    fn description() -> &'static str {
        "Players alternate and the turn marker matches the status"
    }
}

//! Status consistency invariant: the recorded status is what the board says.

use super::super::rules::{is_full, wins_through};
use super::super::{BoardSnapshot, GameStatus};
use super::Invariant;

/// Invariant: the status follows from the board and the last move.
///
/// - `Won(p)` needs `p` to have made the last move and that move to complete a run.
/// - `Draw` needs a full board after `cell_count` moves with no winning last move.
/// - `InProgress` needs room left on the board and no winning last move.
pub struct StatusConsistentInvariant;

impl Invariant<BoardSnapshot> for StatusConsistentInvariant {
    fn holds(snapshot: &BoardSnapshot) -> bool {
        let variant = snapshot.variant();
        let grid = snapshot.cells();
        let last = snapshot.history().last();
        let last_wins = last.is_some_and(|record| {
            wins_through(grid, record.cell, record.player, variant.run_length())
        });
        let moves = snapshot.move_count() as usize;

        match snapshot.status() {
            GameStatus::Won(winner) => last_wins && last.is_some_and(|record| record.player == *winner),
            GameStatus::Draw => moves == variant.cell_count() && is_full(grid) && !last_wins,
            GameStatus::InProgress => moves < variant.cell_count() && !last_wins,
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board and move count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Target, Variant};

    fn play(variant: Variant, targets: &[Target]) -> BoardSnapshot {
        targets.iter().fold(BoardSnapshot::new(variant), |s, &t| {
            s.apply_move(t, None).unwrap()
        })
    }

    #[test]
    fn test_engine_statuses_hold() {
        let draw = [0, 1, 2, 4, 3, 5, 7, 6, 8].map(Target::Cell);
        assert!(StatusConsistentInvariant::holds(&play(Variant::TicTacToe, &draw)));

        let won = [0, 3, 1, 4, 2].map(Target::Cell);
        assert!(StatusConsistentInvariant::holds(&play(Variant::TicTacToe, &won)));

        assert!(StatusConsistentInvariant::holds(&BoardSnapshot::new(Variant::ConnectFour)));
    }

    #[test]
    fn test_early_draw_violates() {
        let mut snapshot = play(Variant::TicTacToe, &[Target::Cell(0)]);
        snapshot.set_status(GameStatus::Draw);
        assert!(!StatusConsistentInvariant::holds(&snapshot));
    }

    #[test]
    fn test_win_without_line_violates() {
        let mut snapshot = play(Variant::ConnectFour, &[Target::Column(3)]);
        snapshot.set_status(GameStatus::Won(crate::Player::First));
        assert!(!StatusConsistentInvariant::holds(&snapshot));
    }

    #[test]
    fn test_unnoticed_win_violates() {
        let mut snapshot = play(Variant::TicTacToe, &[0, 3, 1, 4, 2].map(Target::Cell));
        snapshot.set_status(GameStatus::InProgress);
        assert!(!StatusConsistentInvariant::holds(&snapshot));
    }
}

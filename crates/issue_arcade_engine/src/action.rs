//! Move targets and the errors a rejected move reports.

use super::Coord;
use serde::{Deserialize, Serialize};

/// What a move addresses before the variant's placement rule resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Zero-based row-major cell index (tic-tac-toe).
    Cell(usize),
    /// Zero-based column (connect-four).
    Column(usize),
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Cell(index) => write!(f, "position {}", index),
            Target::Column(column) => write!(f, "column {}", column + 1),
        }
    }
}

/// Error that can occur when applying a move.
///
/// Checks run in declaration order and the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already ended in a win or a draw.
    #[display("Game is over!")]
    GameOver,

    /// The target is out of range, or the wrong kind for the variant.
    #[display("Invalid {}.", target)]
    InvalidTarget {
        /// The rejected target.
        target: Target,
    },

    /// The addressed cell already holds a mark.
    #[display("Position {} is already taken!", cell)]
    CellOccupied {
        /// The occupied cell.
        cell: Coord,
    },

    /// The addressed column has no empty row left.
    #[display("Column {} is full! Choose another column.", column + 1)]
    ColumnFull {
        /// Zero-based column.
        column: usize,
    },
}

impl std::error::Error for MoveError {}

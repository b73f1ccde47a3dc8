//! Win detection through the most recently placed cell.

use crate::{Coord, Grid, Player, Square};
use tracing::instrument;

/// Row and column steps for horizontal, vertical and both diagonals.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Consecutive `player` squares starting one step away from `from` and
/// walking `(dr, dc)` until the first other square or the edge.
fn count_consecutive(grid: &Grid, from: Coord, (dr, dc): (isize, isize), player: Player) -> usize {
    let mut row = from.row as isize + dr;
    let mut column = from.column as isize + dc;
    let mut count = 0;
    while grid.get_signed(row, column) == Some(Square::Occupied(player)) {
        count += 1;
        row += dr;
        column += dc;
    }
    count
}

/// Length of the `player` run along one axis through `at`, counting `at`.
pub fn run_through(grid: &Grid, at: Coord, (dr, dc): (isize, isize), player: Player) -> usize {
    1 + count_consecutive(grid, at, (dr, dc), player) + count_consecutive(grid, at, (-dr, -dc), player)
}

/// Checks if the piece at `at` completes a run of at least `run_length`.
///
/// Only the four lines through `at` are examined.
#[instrument(skip(grid))]
pub fn wins_through(grid: &Grid, at: Coord, player: Player, run_length: usize) -> bool {
    DIRECTIONS
        .iter()
        .any(|&direction| run_through(grid, at, direction, player) >= run_length)
}

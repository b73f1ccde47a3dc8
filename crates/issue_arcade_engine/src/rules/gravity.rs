//! Gravity resolution for dropped pieces.

use crate::{Coord, Grid, Square};
use tracing::instrument;

/// Lowest empty row in a column, scanning from the bottom row upward.
///
/// Returns `None` when the column is full or out of bounds.
#[instrument(skip(grid))]
pub fn landing_row(grid: &Grid, column: usize) -> Option<usize> {
    if column >= grid.column_count() {
        return None;
    }
    (0..grid.row_count())
        .rev()
        .find(|&row| grid.is_empty(Coord::new(row, column)))
}

/// Checks that no occupied square floats above an empty one.
pub fn is_supported(grid: &Grid) -> bool {
    let bottom = grid.row_count().saturating_sub(1);
    grid.squares().all(|(at, square)| {
        square == Square::Empty || at.row == bottom || !grid.is_empty(Coord::new(at.row + 1, at.column))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Variant};

    #[test]
    fn test_empty_column_lands_on_bottom() {
        let grid = Grid::for_variant(Variant::ConnectFour);
        assert_eq!(landing_row(&grid, 3), Some(5));
    }

    #[test]
    fn test_stacked_column_lands_above() {
        let mut grid = Grid::for_variant(Variant::ConnectFour);
        grid.set(Coord::new(5, 3), Square::Occupied(Player::First)).unwrap();
        grid.set(Coord::new(4, 3), Square::Occupied(Player::Second)).unwrap();
        assert_eq!(landing_row(&grid, 3), Some(3));
    }

    #[test]
    fn test_full_column() {
        let mut grid = Grid::for_variant(Variant::ConnectFour);
        for row in 0..6 {
            grid.set(Coord::new(row, 0), Square::Occupied(Player::First)).unwrap();
        }
        assert_eq!(landing_row(&grid, 0), None);
        assert_eq!(landing_row(&grid, 7), None);
    }

    #[test]
    fn test_floating_piece_detected() {
        let mut grid = Grid::for_variant(Variant::ConnectFour);
        assert!(is_supported(&grid));
        grid.set(Coord::new(3, 2), Square::Occupied(Player::Second)).unwrap();
        assert!(!is_supported(&grid));
    }
}

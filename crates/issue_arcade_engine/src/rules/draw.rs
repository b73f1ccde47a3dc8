//! Draw detection.

use crate::{Grid, Square, Variant};
use tracing::instrument;

/// Checks if every square is occupied.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.squares().all(|(_, s)| s != Square::Empty)
}

/// A game without a winner is drawn exactly when the move count reaches the
/// number of cells.
#[instrument]
pub fn is_draw(variant: Variant, move_count: u32) -> bool {
    move_count as usize == variant.cell_count()
}

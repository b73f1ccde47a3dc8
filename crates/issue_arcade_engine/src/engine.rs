//! Move application for both variants.
//!
//! The engine is pure: a snapshot goes in, a new snapshot comes out, and the
//! input is never touched. Persisting the result is the caller's job.

use super::invariants::{InvariantSet, SnapshotInvariants};
use super::rules::{is_draw, landing_row, wins_through};
use super::{BoardSnapshot, Coord, GameStatus, MoveError, Placement, Target};
use tracing::{debug, info, instrument};

impl BoardSnapshot {
    /// Applies one placement for the player whose turn it is.
    ///
    /// Preconditions, first failure wins:
    /// 1. the game is in progress ([`MoveError::GameOver`]),
    /// 2. the target is in bounds and of the right kind for the variant
    ///    ([`MoveError::InvalidTarget`]),
    /// 3. the cell is empty or the column has room
    ///    ([`MoveError::CellOccupied`], [`MoveError::ColumnFull`]).
    ///
    /// On success the mark lands, the history grows by one record, and the
    /// status becomes `Won` (turn kept), `Draw`, or play passes to the
    /// opponent.
    #[instrument(skip(self), fields(variant = %self.variant(), turn = ?self.turn()))]
    pub fn apply_move(&self, target: Target, author: Option<&str>) -> Result<Self, MoveError> {
        if self.status().is_terminal() {
            debug!(status = ?self.status(), "Rejecting move on finished game");
            return Err(MoveError::GameOver);
        }

        let landing = self.resolve(target)?;
        let player = self.turn();
        let variant = self.variant();

        let mut next = self.clone();
        next.place(landing, author)
            .map_err(|_| MoveError::InvalidTarget { target })?;

        if wins_through(next.cells(), landing, player, variant.run_length()) {
            info!(?player, row = landing.row, column = landing.column, "Winning move");
            next.set_status(GameStatus::Won(player));
        } else if is_draw(variant, next.move_count()) {
            info!(move_count = next.move_count(), "Board full, game drawn");
            next.set_status(GameStatus::Draw);
        } else {
            next.pass_turn();
        }

        debug_assert!(
            SnapshotInvariants::check_all(&next).is_ok(),
            "engine produced a snapshot violating its invariants"
        );
        Ok(next)
    }

    /// Returns the canonical fresh snapshot for this snapshot's variant.
    #[instrument(skip(self), fields(variant = %self.variant()))]
    pub fn reset(&self) -> Self {
        Self::new(self.variant())
    }

    /// Every target the engine would currently accept, in board order.
    ///
    /// Empty once the game is over.
    #[instrument(skip(self))]
    pub fn legal_targets(&self) -> Vec<Target> {
        if self.status().is_terminal() {
            return Vec::new();
        }
        let variant = self.variant();
        match variant.placement() {
            Placement::Direct => (0..variant.cell_count())
                .map(Target::Cell)
                .filter(|&target| self.resolve(target).is_ok())
                .collect(),
            Placement::Gravity => (0..variant.columns())
                .map(Target::Column)
                .filter(|&target| self.resolve(target).is_ok())
                .collect(),
        }
    }

    /// Maps a target to its landing cell, checking bounds and occupancy.
    fn resolve(&self, target: Target) -> Result<Coord, MoveError> {
        let variant = self.variant();
        match (variant.placement(), target) {
            (Placement::Direct, Target::Cell(index)) if index < variant.cell_count() => {
                let at = Coord::new(index / variant.columns(), index % variant.columns());
                if self.cells().is_empty(at) {
                    Ok(at)
                } else {
                    Err(MoveError::CellOccupied { cell: at })
                }
            }
            (Placement::Gravity, Target::Column(column)) if column < variant.columns() => {
                landing_row(self.cells(), column)
                    .map(|row| Coord::new(row, column))
                    .ok_or(MoveError::ColumnFull { column })
            }
            _ => Err(MoveError::InvalidTarget { target }),
        }
    }
}

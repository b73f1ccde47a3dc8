//! Grid shape invariant: the grid has the variant's dimensions.

use super::super::BoardSnapshot;
use super::Invariant;

/// Invariant: the grid is `rows x columns` for the snapshot's variant.
pub struct GridShapeInvariant;

impl Invariant<BoardSnapshot> for GridShapeInvariant {
    fn holds(snapshot: &BoardSnapshot) -> bool {
        snapshot.cells().fits(snapshot.variant())
    }

    fn description() -> &'static str {
        "Grid dimensions match the variant"
    }
}

//! Gravity invariant: connect-four pieces never float.

use super::super::rules::is_supported;
use super::super::{BoardSnapshot, Placement};
use super::Invariant;

/// Invariant: in gravity variants every piece sits on the bottom row or on
/// another piece.
pub struct SupportedPiecesInvariant;

impl Invariant<BoardSnapshot> for SupportedPiecesInvariant {
    fn holds(snapshot: &BoardSnapshot) -> bool {
        match snapshot.variant().placement() {
            Placement::Direct => true,
            Placement::Gravity => is_supported(snapshot.cells()),
        }
    }

    fn description() -> &'static str {
        "Every dropped piece rests on the bottom row or another piece"
    }
}

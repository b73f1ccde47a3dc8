//! First-class invariants for board snapshots.
//!
//! Invariants are logical properties that must hold for every snapshot the
//! engine produces. The engine asserts them in debug builds, and storage checks
//! them before trusting a snapshot read back from disk.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all hold, or every violation found.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod alternating_turn;
pub mod grid_shape;
pub mod history_consistent;
pub mod status_consistent;
pub mod supported_pieces;

pub use alternating_turn::AlternatingTurnInvariant;
pub use grid_shape::GridShapeInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use status_consistent::StatusConsistentInvariant;
pub use supported_pieces::SupportedPiecesInvariant;

/// All snapshot invariants as a composable set.
pub type SnapshotInvariants = (
    GridShapeInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    SupportedPiecesInvariant,
    StatusConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSnapshot, Target, Variant};

    #[test]
    fn test_invariant_set_holds_for_fresh_snapshots() {
        assert!(SnapshotInvariants::check_all(&BoardSnapshot::new(Variant::TicTacToe)).is_ok());
        assert!(SnapshotInvariants::check_all(&BoardSnapshot::new(Variant::ConnectFour)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let snapshot = [Target::Column(3), Target::Column(3), Target::Column(4)]
            .into_iter()
            .fold(BoardSnapshot::new(Variant::ConnectFour), |s, t| s.apply_move(t, None).unwrap());
        assert!(SnapshotInvariants::check_all(&snapshot).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let json = r#"{
            "variant": "tic_tac_toe",
            "cells": [["Empty","Empty","Empty"],["Empty","Empty","Empty"],["Empty","Empty","Empty"]],
            "turn": "Second",
            "status": "InProgress",
            "move_count": 1,
            "history": []
        }"#;
        let snapshot: BoardSnapshot = serde_json::from_str(json).unwrap();
        let violations = SnapshotInvariants::check_all(&snapshot).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (GridShapeInvariant, HistoryConsistentInvariant);
        assert!(TwoInvariants::check_all(&BoardSnapshot::new(Variant::TicTacToe)).is_ok());
    }
}

//! Pure board engine for issue-driven tic-tac-toe and connect-four.
//!
//! This crate owns everything with game rules in it and nothing that touches
//! the filesystem:
//!
//! - **Types**: [`Variant`], [`BoardSnapshot`], [`Grid`], [`MoveRecord`]
//! - **Engine**: [`BoardSnapshot::apply_move`] and [`BoardSnapshot::reset`]
//! - **Rules**: win detection through the placed cell, draw and gravity helpers
//! - **Commands**: [`Grammar`] turns a free-text issue title into a [`Command`]
//! - **Invariants**: checkable properties of a snapshot, used after each move
//!   and when a snapshot is restored from storage
//!
//! # Example
//!
//! ```
//! use issue_arcade_engine::{BoardSnapshot, Command, GameStatus, Grammar, Player, Variant};
//!
//! let grammar = Grammar::for_variant(Variant::TicTacToe);
//! let mut snapshot = BoardSnapshot::new(Variant::TicTacToe);
//! for title in ["move: A1", "move: A2", "move: B1", "move: B2", "move: C1"] {
//!     if let Command::Move(target) = grammar.parse(title) {
//!         snapshot = snapshot.apply_move(target, None).unwrap();
//!     }
//! }
//! assert_eq!(snapshot.status(), &GameStatus::Won(Player::First));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod command;
mod engine;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{MoveError, Target};
pub use command::{ColumnGrammar, Command, Grammar, PhraseMatch, ResetVocabulary, Rule};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, SnapshotInvariants};
pub use types::{BoardSnapshot, Coord, GameStatus, Grid, MoveRecord, Placement, Player, Square, Variant};

//! Game rules shared by both variants.
//!
//! Pure functions over a [`Grid`](crate::Grid). Rules are separated from board
//! storage so the engine, the invariants and the tests can compose them.

pub mod draw;
pub mod gravity;
pub mod win;

pub use draw::{is_draw, is_full};
pub use gravity::{is_supported, landing_row};
pub use win::{DIRECTIONS, run_through, wins_through};

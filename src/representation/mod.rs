//! Defines the game representation and move generation (spec §3, §4.1).
//!
//! `State` is the single mutable-by-value type the rest of the engine
//! operates on. Everything else in this module (`Piece`, `Square`,
//! `Player`, `Phase`, `Move`, `Payoffs`) is a small, `Copy` value type
//! that `State` is built from.

mod r#move;
mod payoffs;
mod phase;
mod piece;
mod player;
mod square;
mod state;

pub use self::r#move::Move;
pub use payoffs::Payoffs;
pub use phase::Phase;
pub use piece::{Piece, PIECES};
pub use player::Player;
pub use square::{Square, ADIAG, COLS, DIAG, ROWS, SQUARES};
pub use state::State;

use std::fmt;

use super::{Piece, Square};

/// A single action: select a piece for the opponent, or place the
/// currently selected piece on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Give(Piece),
    Put(Square),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Give(piece) => write!(f, "give({piece})"),
            Move::Put(square) => write!(f, "put{square}"),
        }
    }
}

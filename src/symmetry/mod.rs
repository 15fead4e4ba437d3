//! Symmetry folding (spec §4.2).
//!
//! Quarto has two independent symmetry groups: the board's rotations
//! and reflections (which squares are "the same shape"), and an
//! attribute-relabelling group on the pieces (which piece bit patterns
//! are "the same piece" once you're free to rename attributes and
//! invert them). Folding a position through both, after every move,
//! collapses positions that differ only by a relabelling an opponent
//! couldn't tell apart from the board in front of them — which shrinks
//! both the legal-move set and the space a search has to cover.
//!
//! Both groups are precomputed once, by breadth-first search over
//! canonical states, into the tables in [`board`] and [`piece`]. This
//! module wires them into an [`Engine`] that wraps
//! [`State::play`](crate::representation::State::play) with the
//! relabelling step, and offers a pruned, canonically-ordered
//! [`Engine::legal_moves`] in place of
//! [`State::legal_moves`](crate::representation::State::legal_moves).
//!
//! Folding is strictly an optimization: every operation here has the
//! same externally observable game-theoretic meaning as its unfolded
//! counterpart, just over a smaller set of positions. Callers that
//! don't want it (e.g. to print a position exactly as a human played
//! it) use `State` directly.

pub mod board;
pub mod piece;

use crate::error::EngineError;
use crate::representation::{Move, Phase, State};

pub use board::{BoardTables, Transform};
pub use piece::{Mapping, PieceTables};

lazy_static! {
    static ref TABLES: Engine = Engine::build();
}

/// The symmetry-folded move generator and player.
///
/// Expensive to build (two breadth-first searches over the full state
/// space), so there is exactly one, built lazily on first use and
/// shared for the process's lifetime.
pub struct Engine {
    board: BoardTables,
    pieces: PieceTables,
}

impl Engine {
    fn build() -> Self {
        Engine { board: BoardTables::build(), pieces: PieceTables::build() }
    }

    /// The process-wide symmetry tables, built on first access.
    pub fn shared() -> &'static Engine {
        &TABLES
    }

    /// The legal moves from `state`, pruned to one representative per
    /// symmetry class and ordered by the folding engine's move
    /// ordering (ascending piece-set entropy for GIVE, descending
    /// board connectedness for PUT).
    ///
    /// `state` must itself be canonical (the result of `Engine::play`
    /// calls all the way from `State::new()`); calling this on an
    /// arbitrary state silently looks up whichever symmetry class it
    /// happens to collide with.
    pub fn legal_moves(&self, state: &State) -> Vec<Move> {
        match state.phase() {
            Phase::Give => self
                .pieces
                .available_pieces(state.pieces_mask())
                .iter()
                .map(|&piece| Move::Give(piece))
                .collect(),
            Phase::Put => self
                .board
                .free_squares(state.squares_mask())
                .iter()
                .map(|&square| Move::Put(square))
                .collect(),
        }
    }

    /// Plays `mv` and folds the result back onto its canonical
    /// representative.
    pub fn play(&self, state: &State, mv: Move) -> Result<State, EngineError> {
        let next = state.play(mv)?;
        let folded = match mv {
            Move::Give(piece) => {
                let mapping = self.pieces.mapping_for(state.pieces_mask(), piece);
                if mapping == Mapping::identity() {
                    next
                } else {
                    next.remap_pieces(|p| piece::map_piece(p, mapping))
                }
            }
            Move::Put(square) => {
                let transform = self.board.transform_for(state.squares_mask(), square);
                if transform == Transform::IDENTITY {
                    next
                } else {
                    next.remap_squares(|sq| board::map_square(sq, transform))
                }
            }
        };
        Ok(folded)
    }
}

/// Whether a search or self-play driver folds positions through the
/// symmetry groups before generating moves.
///
/// Folding is pure overhead on very short games (building the tables
/// the first time costs more than the search it prunes) but pays for
/// itself quickly once search trees get non-trivial; callers decide
/// per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryMode {
    Folded,
    Unfolded,
}

impl SymmetryMode {
    pub fn legal_moves(self, state: &State) -> Vec<Move> {
        match self {
            SymmetryMode::Folded => Engine::shared().legal_moves(state),
            SymmetryMode::Unfolded => state.legal_moves(),
        }
    }

    pub fn play(self, state: &State, mv: Move) -> Result<State, EngineError> {
        match self {
            SymmetryMode::Folded => Engine::shared().play(state, mv),
            SymmetryMode::Unfolded => state.play(mv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_folded_game_played_to_completion_stays_well_formed() {
        // Always taking the first symmetry-pruned move must still reach
        // a terminal, self-consistent state within the ply limit —
        // folding must never produce an illegal move or an infinite
        // game.
        let engine = Engine::shared();
        let mut state = State::new();
        let mut plies = 0;
        while !state.is_over() {
            let mv = *engine.legal_moves(&state).first().expect("a legal move exists");
            state = engine.play(&state, mv).unwrap();
            plies += 1;
            assert!(plies <= 32);
        }
        assert_eq!(state.winner().is_some(), state.payoffs()[crate::representation::Player::Player1] != 0.0);
    }

    #[test]
    fn legal_moves_from_empty_board_are_pruned() {
        let state = State::new();
        let folded = Engine::shared().legal_moves(&state);
        let unfolded = state.legal_moves();
        assert!(folded.len() < unfolded.len());
    }
}

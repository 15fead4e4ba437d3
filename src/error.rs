//! Defines the engine's error taxonomy.
//!
//! `InvariantViolation` and `TableCorruption` indicate a bug in the
//! engine itself (a missing symmetry-table entry, an inverted
//! transposition bound, a ply/phase mismatch). In development builds
//! these are caught earlier by `assert!`/`debug_assert!`; this type
//! exists so that a release build can surface them to a caller instead
//! of panicking. `TimeExceeded` is not represented here: per the
//! engine's design, running out of time is a normal exit condition of
//! iterative deepening, not a failure.

use crate::representation::Move;

/// An error produced by the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// The given move is not a member of the current legal-move set,
    /// including a move offered in the wrong phase.
    #[error("illegal move {attempted:?} in phase {phase}")]
    IllegalMove {
        attempted: Move,
        phase: &'static str,
    },

    /// A precomputed symmetry table had no entry for a (state, move)
    /// pair that should always be present, or a ply/phase invariant
    /// does not hold.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// A transposition table entry's bounds are inconsistent with its
    /// stored depth (e.g. `lower > upper`).
    #[error("transposition table corruption: {0}")]
    TableCorruption(String),
}

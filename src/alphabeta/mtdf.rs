//! MTD(f): drive alpha-beta with a sequence of zero-width windows that
//! converge on the position's true value, and iterative deepening on
//! top of that to get an anytime result.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::error::EngineError;
use crate::representation::State;
use crate::symmetry::SymmetryMode;
use crate::value::{Depth, Value};

use super::search::alphabeta;
use super::tt::TranspositionTable;

/// Converges on `root`'s exact value at a fixed `depth` using a series
/// of null-window alpha-beta searches seeded from `first_guess`.
pub fn mtdf(
    tt: &mut TranspositionTable,
    symmetry: SymmetryMode,
    root: &State,
    first_guess: Value,
    depth: Depth,
    fail_soft: bool,
) -> Result<Value, EngineError> {
    let mut value = first_guess;
    let mut upperbound = Value::INFINITY;
    let mut lowerbound = Value::NEG_INFINITY;
    while lowerbound < upperbound {
        let beta = if value == lowerbound { value + 1.0 } else { value };
        let (v, _) = alphabeta(tt, symmetry, root, depth, beta - 1.0, beta, fail_soft)?;
        value = v;
        if value < beta {
            upperbound = value;
        } else {
            lowerbound = value;
        }
        debug!("mtdf window narrowed to [{lowerbound}, {upperbound}] at value={value}");
    }
    Ok(value)
}

/// Runs [`mtdf`] at increasing depths (2 half-moves at a time),
/// filtering the transposition table to its fully-resolved entries
/// between iterations, until a decisive value is found, `max_depth` is
/// reached, or `max_time` elapses.
pub fn iterative_deepening(
    tt: &mut TranspositionTable,
    symmetry: SymmetryMode,
    root: &State,
    max_depth: Depth,
    fail_soft: bool,
    max_time: Duration,
) -> Result<Value, EngineError> {
    let mut first_guess = 0.0;
    let start = Instant::now();
    let mut depth = 2;
    while depth <= max_depth {
        tt.filter_resolved();
        let value = mtdf(tt, symmetry, root, first_guess, depth, fail_soft)?;
        first_guess = value;
        info!("iterative deepening reached depth={depth} value={value} table_size={}", tt.len());
        if value.abs() > 0.0 {
            break;
        }
        if start.elapsed() > max_time {
            break;
        }
        depth += 2;
    }
    Ok(first_guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representation::{Move, Piece, Square};

    #[test]
    fn finds_an_immediate_win() {
        // Three pieces already placed sharing attribute bit 0; Player1
        // is about to receive the piece that completes the row.
        let mut state = State::new();
        let setup = [
            (Piece::new(0b0001), Square::new(0, 0)),
            (Piece::new(0b0011), Square::new(0, 1)),
            (Piece::new(0b0101), Square::new(0, 2)),
        ];
        for (piece, square) in setup {
            state = state.play(Move::Give(piece)).unwrap();
            state = state.play(Move::Put(square)).unwrap();
        }
        state = state.play(Move::Give(Piece::new(0b0111))).unwrap();

        let mut tt = TranspositionTable::new();
        let (value, _) =
            alphabeta(&mut tt, SymmetryMode::Unfolded, &state, 4, Value::NEG_INFINITY, Value::INFINITY, true)
                .unwrap();
        assert_eq!(value, 1.0);
    }

    #[test]
    fn mtdf_agrees_with_a_full_window_search() {
        let state = State::new().play(Move::Give(Piece::new(0))).unwrap();
        let mut tt_direct = TranspositionTable::new();
        let (direct, _) = alphabeta(
            &mut tt_direct,
            SymmetryMode::Unfolded,
            &state,
            4,
            Value::NEG_INFINITY,
            Value::INFINITY,
            true,
        )
        .unwrap();

        let mut tt_mtdf = TranspositionTable::new();
        let via_mtdf = mtdf(&mut tt_mtdf, SymmetryMode::Unfolded, &state, 0.0, 4, true).unwrap();
        assert_eq!(direct, via_mtdf);
    }
}

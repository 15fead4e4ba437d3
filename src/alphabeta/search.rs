//! Fail-soft alpha-beta with transposition-table bounds.
//!
//! Values are always from `Player1`'s perspective: `Player1` maximizes,
//! `Player2` minimizes. This is what lets [`super::mtdf::mtdf`] drive
//! the search with a single scalar null window regardless of which
//! player is actually to move at the root.

use log::debug;

use crate::error::EngineError;
use crate::representation::{Player, State};
use crate::symmetry::SymmetryMode;
use crate::value::{Depth, Value, DEPTH_RESOLVED};

use super::tt::TranspositionTable;

/// Searches `state` to `depth` half-moves, returning its value and the
/// depth its subtree was actually resolved to (see [`super::tt::Entry::depth`]).
///
/// `fail_soft` controls whether a cutoff keeps searching siblings
/// already known to be worse (`true`, fail-soft: the returned bound
/// can be tighter than the window) or stops at the first one that
/// crosses the window (`false`, fail-hard).
pub fn alphabeta(
    tt: &mut TranspositionTable,
    symmetry: SymmetryMode,
    state: &State,
    depth: Depth,
    mut alpha: Value,
    mut beta: Value,
    fail_soft: bool,
) -> Result<(Value, Depth), EngineError> {
    debug!("entering alphabeta: depth={depth} alpha={alpha} beta={beta}");
    let key = state.state_to_string();
    {
        let entry = tt.lookup(&key);
        if entry.valid && entry.depth >= depth {
            if entry.lower >= beta {
                debug!("tt cutoff on lower bound: {}", entry.lower);
                return Ok((entry.lower, entry.depth));
            }
            if entry.upper <= alpha {
                debug!("tt cutoff on upper bound: {}", entry.upper);
                return Ok((entry.upper, entry.depth));
            }
            alpha = alpha.max(entry.lower);
            beta = beta.min(entry.upper);
        }
    }

    let game_over = state.is_over();
    let (best_value, best_move, min_depth) = if game_over || depth == 0 {
        (state.payoffs()[Player::Player1], None, if game_over { DEPTH_RESOLVED } else { depth })
    } else if state.player_to_move() == Player::Player1 {
        maximize(tt, symmetry, state, depth, alpha, beta, fail_soft)?
    } else {
        minimize(tt, symmetry, state, depth, alpha, beta, fail_soft)?
    };

    let entry = tt.lookup(&key);
    if best_value <= alpha {
        entry.upper = best_value;
    }
    if alpha < best_value && best_value < beta {
        entry.lower = best_value;
        entry.upper = best_value;
    }
    if best_value >= beta {
        entry.lower = best_value;
    }
    entry.best_move = best_move;
    entry.depth = min_depth;
    entry.valid = true;

    debug!("exiting alphabeta: depth={depth} value={best_value} resolved_depth={min_depth}");
    Ok((best_value, min_depth))
}

#[allow(clippy::too_many_arguments)]
fn maximize(
    tt: &mut TranspositionTable,
    symmetry: SymmetryMode,
    state: &State,
    depth: Depth,
    alpha: Value,
    beta: Value,
    fail_soft: bool,
) -> Result<(Value, Option<crate::representation::Move>, Depth), EngineError> {
    let mut best_value = Value::NEG_INFINITY;
    let mut best_move = None;
    let mut min_depth = DEPTH_RESOLVED;
    let mut a = alpha;
    for mv in symmetry.legal_moves(state) {
        let child = symmetry.play(state, mv)?;
        let (value, plies) = alphabeta(tt, symmetry, &child, depth - 1, a, beta, fail_soft)?;
        if value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
        min_depth = min_depth.min(plies.saturating_add(1));
        if !fail_soft && best_value > beta {
            break;
        }
        a = a.max(best_value);
        if fail_soft && best_value >= beta {
            break;
        }
    }
    Ok((best_value, best_move, min_depth))
}

#[allow(clippy::too_many_arguments)]
fn minimize(
    tt: &mut TranspositionTable,
    symmetry: SymmetryMode,
    state: &State,
    depth: Depth,
    alpha: Value,
    beta: Value,
    fail_soft: bool,
) -> Result<(Value, Option<crate::representation::Move>, Depth), EngineError> {
    let mut best_value = Value::INFINITY;
    let mut best_move = None;
    let mut min_depth = DEPTH_RESOLVED;
    let mut b = beta;
    for mv in symmetry.legal_moves(state) {
        let child = symmetry.play(state, mv)?;
        let (value, plies) = alphabeta(tt, symmetry, &child, depth - 1, alpha, b, fail_soft)?;
        if value < best_value {
            best_value = value;
            best_move = Some(mv);
        }
        min_depth = min_depth.min(plies.saturating_add(1));
        if !fail_soft && best_value < alpha {
            break;
        }
        b = b.min(best_value);
        if fail_soft && best_value <= alpha {
            break;
        }
    }
    Ok((best_value, best_move, min_depth))
}

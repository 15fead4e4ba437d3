//! Defines scalar types shared by both search engines.

/// A payoff value, from a player's perspective.
///
/// Terminal payoffs are `1.0` (win), `-1.0` (loss), or `0.0` (draw).
/// MCTS nodes accumulate cumulative sums of leaf payoffs in this type;
/// alpha-beta treats it as the evaluation of a position from `PLAYER1`'s
/// perspective, with `PLAYER1` maximizing and `PLAYER2` minimizing.
pub type Value = f64;

/// The number of half-moves searched, or a fully-expanded search tree's
/// node count.
pub type NodeCount = u64;

/// A search depth in half-moves (GIVE and PUT each count as one ply).
///
/// `Depth::MAX` is used as "infinity": it marks a transposition table
/// entry whose value is exact because the subtree was resolved all the
/// way to a terminal state, as opposed to cut off by a depth limit.
pub type Depth = u32;

/// The sentinel depth meaning "resolved to a terminal state", used by
/// iterative deepening to decide which transposition entries survive a
/// depth bump (see `alphabeta::tt`).
pub const DEPTH_RESOLVED: Depth = Depth::MAX;

/// The maximum number of plies in a game (16 GIVE + 16 PUT).
pub const MAX_PLY: u8 = 32;

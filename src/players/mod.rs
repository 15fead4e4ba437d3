//! Wires both search engines behind one interface a driver can hold
//! without caring which kind of player it's talking to.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::alphabeta::{iterative_deepening, TranspositionTable};
use crate::error::EngineError;
use crate::mcts::{self, BatchRollout, Mcts, MaxTime, SampleExpand, SerialExecutor};
use crate::representation::{Move, State};
use crate::symmetry::SymmetryMode;
use crate::value::{Depth, Value};

/// Something that can pick a move for the player to move in `state`.
pub trait Player {
    fn choose_move(&mut self, state: &State) -> Result<Move, EngineError>;
}

/// [`MctsPlayer`] tuning knobs, defaulted per the engine's reference
/// configuration: a 2-second budget, one simulation and one expansion
/// per visited leaf, and a UCT exploration constant of 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MctsConfig {
    pub max_time: Duration,
    pub expand_k: usize,
    pub n_sims: usize,
    pub exploration: Value,
    pub symmetry: SymmetryMode,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            max_time: Duration::from_secs_f64(2.0),
            expand_k: 1,
            n_sims: 1,
            exploration: 1.0,
            symmetry: SymmetryMode::Folded,
        }
    }
}

/// Plays by running a fresh Monte Carlo Tree Search for every move.
///
/// Uses a serial executor and random-rollout simulation: the
/// thread-pool executor and batched rollouts in [`crate::mcts`] are
/// available to a caller who builds an [`Mcts`] directly, but aren't
/// exposed as `MctsPlayer` knobs since they change performance, not
/// move choice.
pub struct MctsPlayer {
    config: MctsConfig,
    rng: StdRng,
}

impl MctsPlayer {
    pub fn new(config: MctsConfig) -> Self {
        MctsPlayer { config, rng: StdRng::from_entropy() }
    }

    pub fn with_seed(config: MctsConfig, seed: u64) -> Self {
        MctsPlayer { config, rng: StdRng::seed_from_u64(seed) }
    }
}

impl Player for MctsPlayer {
    fn choose_move(&mut self, state: &State) -> Result<Move, EngineError> {
        let mut search = Mcts {
            select: Box::new(mcts::uct(self.config.exploration)),
            expand: Box::new(SampleExpand { k: self.config.expand_k }),
            simulate: Box::new(BatchRollout { n: self.config.n_sims.max(1) }),
            stop: Box::new(MaxTime { max: self.config.max_time }),
            executor: Box::new(SerialExecutor),
            symmetry: self.config.symmetry,
        };
        search.search(state.clone(), &mut self.rng)
    }
}

/// [`MtdfPlayer`] tuning knobs, defaulted to a 2-second budget and
/// fail-soft alpha-beta to the whole-game depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MtdfConfig {
    pub max_time: Duration,
    pub max_depth: Depth,
    pub fail_soft: bool,
    pub symmetry: SymmetryMode,
}

impl Default for MtdfConfig {
    fn default() -> Self {
        MtdfConfig {
            max_time: Duration::from_secs_f64(2.0),
            max_depth: crate::value::MAX_PLY as Depth,
            fail_soft: true,
            symmetry: SymmetryMode::Folded,
        }
    }
}

/// Plays by running iterative-deepening MTD(f), keeping its
/// transposition table warm across moves within a single game.
pub struct MtdfPlayer {
    config: MtdfConfig,
    tt: TranspositionTable,
}

impl MtdfPlayer {
    pub fn new(config: MtdfConfig) -> Self {
        MtdfPlayer { config, tt: TranspositionTable::new() }
    }
}

impl Player for MtdfPlayer {
    fn choose_move(&mut self, state: &State) -> Result<Move, EngineError> {
        iterative_deepening(
            &mut self.tt,
            self.config.symmetry,
            state,
            self.config.max_depth,
            self.config.fail_soft,
            self.config.max_time,
        )?;
        let key = state.state_to_string();
        self.tt
            .peek(&key)
            .and_then(|entry| entry.best_move)
            .ok_or_else(|| EngineError::InvariantViolation("search found no best move".to_string()))
    }
}

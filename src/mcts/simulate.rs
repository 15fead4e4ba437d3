//! Estimating a position's value by playing it out.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::representation::{Payoffs, State};
use crate::symmetry::SymmetryMode;

/// Estimates the payoffs of `state` for both players.
pub trait SimulatePolicy: Send + Sync {
    fn simulate(&self, state: &State, rng: &mut dyn RngCore, symmetry: SymmetryMode) -> Payoffs;
}

/// Plays uniformly random legal moves until the game ends.
pub struct RandomRollout;

impl SimulatePolicy for RandomRollout {
    fn simulate(&self, state: &State, rng: &mut dyn RngCore, symmetry: SymmetryMode) -> Payoffs {
        let mut current = state.clone();
        while !current.is_over() {
            let moves = symmetry.legal_moves(&current);
            let mv = *moves.choose(rng).expect("a non-terminal state has a legal move");
            current = symmetry.play(&current, mv).expect("generated moves are always legal");
        }
        current.payoffs()
    }
}

/// Averages `n` independent [`RandomRollout`]s, trading simulation
/// time for a lower-variance estimate of a single expansion.
pub struct BatchRollout {
    pub n: usize,
}

impl SimulatePolicy for BatchRollout {
    fn simulate(&self, state: &State, rng: &mut dyn RngCore, symmetry: SymmetryMode) -> Payoffs {
        let mut total = Payoffs::zero();
        for _ in 0..self.n {
            total += RandomRollout.simulate(state, rng, symmetry);
        }
        total.normalize(self.n as f64)
    }
}

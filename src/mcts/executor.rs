//! Where simulation runs: the same thread as the tree, or a pool.
//!
//! Uses a fixed pool of workers that each take a chunk of the batch and
//! run it to completion, built with `std::thread::scope` rather than a
//! persistent-thread command channel: each expansion's batch of
//! rollouts is independent and short-lived, so there's nothing to keep
//! a worker alive for between batches.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::representation::{Payoffs, State};
use crate::symmetry::SymmetryMode;

use super::simulate::SimulatePolicy;

/// Runs a batch of independent simulations and collects their payoffs.
pub trait Executor: Send + Sync {
    fn map_simulate(
        &self,
        simulate: &dyn SimulatePolicy,
        states: &[State],
        symmetry: SymmetryMode,
        rng: &mut dyn RngCore,
    ) -> Vec<Payoffs>;
}

/// Runs every simulation on the calling thread, in order.
pub struct SerialExecutor;

impl Executor for SerialExecutor {
    fn map_simulate(
        &self,
        simulate: &dyn SimulatePolicy,
        states: &[State],
        symmetry: SymmetryMode,
        rng: &mut dyn RngCore,
    ) -> Vec<Payoffs> {
        states.iter().map(|state| simulate.simulate(state, rng, symmetry)).collect()
    }
}

/// Spreads a batch of simulations over a fixed-size thread pool.
///
/// Each worker gets its own RNG, seeded off the caller's, so results
/// are reproducible for a fixed seed regardless of how the batch
/// happens to be chunked across threads — but not bit-identical to
/// [`SerialExecutor`], which draws from a single stream.
pub struct ThreadPoolExecutor {
    pub threads: usize,
}

impl ThreadPoolExecutor {
    pub fn with_available_parallelism() -> Self {
        ThreadPoolExecutor { threads: num_cpus::get() }
    }
}

impl Executor for ThreadPoolExecutor {
    fn map_simulate(
        &self,
        simulate: &dyn SimulatePolicy,
        states: &[State],
        symmetry: SymmetryMode,
        rng: &mut dyn RngCore,
    ) -> Vec<Payoffs> {
        if states.is_empty() {
            return Vec::new();
        }
        let threads = self.threads.max(1).min(states.len());
        let chunk_size = states.len().div_ceil(threads);

        std::thread::scope(|scope| {
            let handles: Vec<_> = states
                .chunks(chunk_size)
                .map(|chunk| {
                    let mut worker_rng = StdRng::seed_from_u64(rng.next_u64());
                    scope.spawn(move || -> Vec<Payoffs> {
                        chunk
                            .iter()
                            .map(|state| simulate.simulate(state, &mut worker_rng, symmetry))
                            .collect()
                    })
                })
                .collect();
            handles.into_iter().flat_map(|h| h.join().expect("worker thread panicked")).collect()
        })
    }
}

//! When to stop iterating.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Decides, after each completed iteration, whether the search loop
/// should return its current best move.
pub trait StopPolicy {
    fn should_stop(&mut self, iterations: u64, elapsed: Duration) -> bool;
}

pub struct MaxIters {
    pub max: u64,
}

impl StopPolicy for MaxIters {
    fn should_stop(&mut self, iterations: u64, _elapsed: Duration) -> bool {
        iterations >= self.max
    }
}

pub struct MaxTime {
    pub max: Duration,
}

impl StopPolicy for MaxTime {
    fn should_stop(&mut self, _iterations: u64, elapsed: Duration) -> bool {
        elapsed >= self.max
    }
}

/// Stops as soon as an externally shared flag is set, so a driver on
/// another thread can cancel an in-progress search (e.g. on a player
/// resignation or a time control shared across several searches).
#[derive(Clone)]
pub struct Asynchronous {
    pub cancelled: Arc<AtomicBool>,
}

impl Asynchronous {
    pub fn new() -> Self {
        Asynchronous { cancelled: Arc::new(AtomicBool::new(false)) }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl Default for Asynchronous {
    fn default() -> Self {
        Self::new()
    }
}

impl StopPolicy for Asynchronous {
    fn should_stop(&mut self, _iterations: u64, _elapsed: Duration) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Stops as soon as any of its sub-policies would.
pub struct FirstOf {
    pub policies: Vec<Box<dyn StopPolicy + Send>>,
}

impl StopPolicy for FirstOf {
    fn should_stop(&mut self, iterations: u64, elapsed: Duration) -> bool {
        self.policies.iter_mut().any(|p| p.should_stop(iterations, elapsed))
    }
}

//! Monte Carlo Tree Search (spec §4.3).
//!
//! The loop itself ([`search::Mcts`]) is fixed; everything it does is
//! delegated to one of four small, independently swappable policies —
//! how to descend the tree ([`select`]), how to grow it
//! ([`expand`]), how to estimate a new leaf's value ([`simulate`]),
//! and when to stop iterating ([`stop`]) — plus an [`executor`] that
//! decides whether a batch of simulations runs serially or spread
//! across a thread pool. None of the policies know about each other;
//! [`search::Mcts`] is the only thing that wires them together.

pub mod executor;
pub mod expand;
pub mod node;
pub mod select;
pub mod simulate;
pub mod stop;

mod search;

pub use executor::{Executor, SerialExecutor, ThreadPoolExecutor};
pub use expand::{ExpandPolicy, SampleExpand, SingleExpand};
pub use node::{Node, NodeId, Tree};
pub use search::Mcts;
pub use select::{uct, Measure, MeasureSelect, SelectPolicy, Uct};
pub use simulate::{BatchRollout, RandomRollout, SimulatePolicy};
pub use stop::{Asynchronous, FirstOf, MaxIters, MaxTime, StopPolicy};

//! The MCTS iteration loop: select, expand, simulate, back-propagate.

use std::time::Instant;

use log::{debug, info};
use rand::RngCore;

use crate::error::EngineError;
use crate::representation::{Move, State};
use crate::symmetry::SymmetryMode;

use super::executor::Executor;
use super::expand::ExpandPolicy;
use super::node::Tree;
use super::select::SelectPolicy;
use super::simulate::SimulatePolicy;
use super::stop::StopPolicy;

/// A fully configured Monte Carlo Tree Search: pick `root`'s best move
/// by repeated select/expand/simulate/back-propagate rounds until
/// `stop` says to return.
pub struct Mcts {
    pub select: Box<dyn SelectPolicy>,
    pub expand: Box<dyn ExpandPolicy>,
    pub simulate: Box<dyn SimulatePolicy>,
    pub stop: Box<dyn StopPolicy>,
    pub executor: Box<dyn Executor>,
    pub symmetry: SymmetryMode,
}

impl Mcts {
    pub fn search(&mut self, root: State, rng: &mut dyn RngCore) -> Result<Move, EngineError> {
        let mut tree = Tree::new(root, self.symmetry);
        let start = Instant::now();
        let mut iterations = 0u64;
        while !self.stop.should_stop(iterations, start.elapsed()) {
            self.iterate(&mut tree, rng)?;
            iterations += 1;
        }
        info!("mcts search ran {iterations} iterations in {:?}", start.elapsed());
        best_move(&tree)
    }

    fn iterate(&mut self, tree: &mut Tree, rng: &mut dyn RngCore) -> Result<(), EngineError> {
        let leaf = self.select.select(tree, tree.root());
        if tree.node(leaf).state.is_over() {
            debug!("selected leaf {leaf} is terminal");
            let payoffs = tree.node(leaf).state.payoffs();
            tree.back_propagate(leaf, payoffs);
            return Ok(());
        }
        let children = self.expand.expand(tree, leaf, rng, self.symmetry)?;
        debug!("expanded leaf {leaf} into {} children", children.len());
        let states: Vec<State> =
            children.iter().map(|&id| tree.node(id).state.clone()).collect();
        let payoffs = self.executor.map_simulate(self.simulate.as_ref(), &states, self.symmetry, rng);
        for (&child, payoff) in children.iter().zip(payoffs) {
            tree.back_propagate(child, payoff);
        }
        Ok(())
    }
}

/// The root move whose child has the best average payoff for the root
/// player, `child.payoffs[root.player] / child.visits`.
fn best_move(tree: &Tree) -> Result<Move, EngineError> {
    let root = tree.node(tree.root());
    let player = root.state.player_to_move();
    root.children
        .iter()
        .max_by(|(_, &a), (_, &b)| {
            let value = |id| {
                let node = tree.node(id);
                node.payoffs[player] / node.visits as f64
            };
            value(a).partial_cmp(&value(b)).expect("payoffs are never NaN")
        })
        .map(|(&mv, _)| mv)
        .ok_or_else(|| EngineError::InvariantViolation("search produced no children".to_string()))
}

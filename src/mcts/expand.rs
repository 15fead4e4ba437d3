//! Growing the tree by one or more children of a selected leaf.

use rand::seq::SliceRandom;
use rand::RngCore;

use super::node::{NodeId, Tree};
use crate::error::EngineError;
use crate::representation::Move;
use crate::symmetry::SymmetryMode;

/// Adds new children to `leaf` and returns their ids. An empty result
/// means `leaf` was terminal and nothing was added.
pub trait ExpandPolicy {
    fn expand(
        &self,
        tree: &mut Tree,
        leaf: NodeId,
        rng: &mut dyn RngCore,
        symmetry: SymmetryMode,
    ) -> Result<Vec<NodeId>, EngineError>;
}

/// Adds up to `k` children, chosen uniformly at random from the moves
/// `leaf` hasn't explored yet; marks `leaf` fully expanded once fewer
/// than `k` moves remain unexplored.
pub struct SampleExpand {
    pub k: usize,
}

impl ExpandPolicy for SampleExpand {
    fn expand(
        &self,
        tree: &mut Tree,
        leaf: NodeId,
        rng: &mut dyn RngCore,
        symmetry: SymmetryMode,
    ) -> Result<Vec<NodeId>, EngineError> {
        if tree.node(leaf).state.is_over() {
            return Ok(Vec::new());
        }
        let moves = symmetry.legal_moves(&tree.node(leaf).state);
        let unexplored: Vec<Move> = moves
            .into_iter()
            .filter(|mv| !tree.node(leaf).children.contains_key(mv))
            .collect();
        let sample_size = self.k.min(unexplored.len());
        let sampled: Vec<Move> =
            unexplored.choose_multiple(rng, sample_size).copied().collect();

        let mut children = Vec::with_capacity(sampled.len());
        for mv in sampled {
            children.push(tree.get_child(leaf, mv)?);
        }
        if unexplored.len() <= self.k {
            tree.node_mut(leaf).fully_expanded = true;
        }
        Ok(children)
    }
}

/// Adds exactly one child, the classic single-sample MCTS expansion.
pub struct SingleExpand;

impl ExpandPolicy for SingleExpand {
    fn expand(
        &self,
        tree: &mut Tree,
        leaf: NodeId,
        rng: &mut dyn RngCore,
        symmetry: SymmetryMode,
    ) -> Result<Vec<NodeId>, EngineError> {
        SampleExpand { k: 1 }.expand(tree, leaf, rng, symmetry)
    }
}

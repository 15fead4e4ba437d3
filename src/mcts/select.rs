//! Tree descent: pick which leaf to expand next.

use super::node::{NodeId, Tree};
use crate::representation::Player;
use crate::value::Value;

/// Descends from the root to a node that still has unexplored moves
/// (or is terminal), by repeatedly choosing the child that maximizes a
/// [`Measure`].
pub trait SelectPolicy {
    fn select(&self, tree: &Tree, root: NodeId) -> NodeId;
}

/// Scores a child from its parent's point of view; the descent always
/// takes the maximum.
pub trait Measure {
    fn score(&self, tree: &Tree, parent: NodeId, child: NodeId, player: Player) -> Value;
}

/// The standard UCT bandit score: exploit the child with the best
/// average payoff so far, balanced against an exploration bonus that
/// favors children visited less often than their parent.
pub struct Uct {
    pub exploration: Value,
}

impl Measure for Uct {
    fn score(&self, tree: &Tree, parent: NodeId, child: NodeId, player: Player) -> Value {
        let child = tree.node(child);
        let parent = tree.node(parent);
        let exploitation = child.payoffs[player] / child.visits as Value;
        let exploration =
            self.exploration * ((parent.visits as Value).ln() / child.visits as Value).sqrt();
        exploitation + exploration
    }
}

pub struct MeasureSelect<M: Measure> {
    pub measure: M,
}

impl<M: Measure> SelectPolicy for MeasureSelect<M> {
    fn select(&self, tree: &Tree, root: NodeId) -> NodeId {
        let mut current = root;
        loop {
            let node = tree.node(current);
            if !node.fully_expanded || node.children.is_empty() {
                return current;
            }
            let player = node.state.player_to_move();
            current = *node
                .children
                .values()
                .max_by(|&&a, &&b| {
                    self.measure
                        .score(tree, current, a, player)
                        .partial_cmp(&self.measure.score(tree, current, b, player))
                        .expect("payoffs are never NaN")
                })
                .expect("fully_expanded implies at least one child");
        }
    }
}

pub fn uct(exploration: Value) -> MeasureSelect<Uct> {
    MeasureSelect { measure: Uct { exploration } }
}

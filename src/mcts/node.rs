//! The search tree MCTS builds, stored as a flat arena.
//!
//! Nodes reference each other by index rather than by owned pointer:
//! a child never outlives its parent's `Vec`, and back-propagation
//! only ever needs to walk upward, so there's no need for `Rc`/`RefCell`
//! bookkeeping.

use std::collections::HashMap;

use crate::representation::{Move, Payoffs, State};
use crate::symmetry::SymmetryMode;

pub type NodeId = usize;

pub struct Node {
    pub state: State,
    pub parent: Option<NodeId>,
    pub children: HashMap<Move, NodeId>,
    pub payoffs: Payoffs,
    pub visits: u64,
    pub fully_expanded: bool,
    pub depth: u32,
}

impl Node {
    fn root(state: State) -> Self {
        let game_over = state.is_over();
        Node {
            state,
            parent: None,
            children: HashMap::new(),
            payoffs: Payoffs::zero(),
            visits: 0,
            fully_expanded: game_over,
            depth: 0,
        }
    }
}

/// The arena backing a single MCTS run.
pub struct Tree {
    nodes: Vec<Node>,
    symmetry: SymmetryMode,
}

impl Tree {
    pub fn new(root_state: State, symmetry: SymmetryMode) -> Self {
        Tree { nodes: vec![Node::root(root_state)], symmetry }
    }

    pub const fn root(&self) -> NodeId {
        0
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// The child of `parent` reached by `mv`, creating it if this is
    /// the first time `mv` has been explored from `parent`.
    pub fn get_child(&mut self, parent: NodeId, mv: Move) -> Result<NodeId, crate::EngineError> {
        if let Some(&child) = self.nodes[parent].children.get(&mv) {
            return Ok(child);
        }
        let parent_state = self.nodes[parent].state.clone();
        let child_state = self.symmetry.play(&parent_state, mv)?;
        let game_over = child_state.is_over();
        let depth = self.nodes[parent].depth + 1;
        let id = self.nodes.len();
        self.nodes.push(Node {
            state: child_state,
            parent: Some(parent),
            children: HashMap::new(),
            payoffs: Payoffs::zero(),
            visits: 0,
            fully_expanded: game_over,
            depth,
        });
        self.nodes[parent].children.insert(mv, id);
        Ok(id)
    }

    /// Adds `payoffs` and one visit to `leaf` and every ancestor.
    pub fn back_propagate(&mut self, leaf: NodeId, payoffs: Payoffs) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = &mut self.nodes[id];
            node.payoffs += payoffs;
            node.visits += 1;
            current = node.parent;
        }
    }
}

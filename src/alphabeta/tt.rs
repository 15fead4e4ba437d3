//! The transposition table: a cache of alpha-beta window bounds keyed
//! by a position's canonical printable form.

use std::collections::HashMap;

use crate::representation::Move;
use crate::value::{Depth, Value, DEPTH_RESOLVED};

/// What the search currently knows about one position.
///
/// `lower`/`upper` bound the position's true value; when they meet,
/// the value is exact. `depth` is not the depth this entry was
/// searched *at* but the minimum depth any of its descendants were
/// resolved to — `DEPTH_RESOLVED` once the subtree bottomed out at a
/// terminal state rather than a depth cutoff, which is what
/// [`TranspositionTable::filter_resolved`] uses to decide what survives
/// a deeper iterative-deepening pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub lower: Value,
    pub upper: Value,
    pub best_move: Option<Move>,
    pub depth: Depth,
    pub valid: bool,
}

impl Default for Entry {
    fn default() -> Self {
        Entry {
            lower: Value::NEG_INFINITY,
            upper: Value::INFINITY,
            best_move: None,
            depth: 0,
            valid: false,
        }
    }
}

/// Maps a position's [`crate::representation::State::state_to_string`]
/// form to its [`Entry`].
#[derive(Default)]
pub struct TranspositionTable {
    table: HashMap<String, Entry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        TranspositionTable::default()
    }

    /// The entry for `key`, inserting a fresh invalid one if absent.
    pub fn lookup(&mut self, key: &str) -> &mut Entry {
        self.table.entry(key.to_string()).or_default()
    }

    /// A read-only peek, without inserting a missing key.
    pub fn peek(&self, key: &str) -> Option<&Entry> {
        self.table.get(key)
    }

    /// Drops every entry whose subtree wasn't fully resolved, so a
    /// deeper iterative-deepening pass starts from only the bounds it
    /// can still trust.
    pub fn filter_resolved(&mut self) {
        self.table.retain(|_, entry| entry.depth == DEPTH_RESOLVED);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

//! A Quarto game engine.
//!
//! Quarto is a perfect-information combinatorial game played on a 4x4
//! board with 16 pieces, each a 4-bit attribute vector. Players alternate
//! selecting a piece for the opponent to place; a player wins by
//! completing a line of four pieces that share at least one attribute.
//!
//! This crate provides the game representation and move generation
//! (`representation`), a symmetry-folding engine that collapses
//! equivalent positions (`symmetry`), a Monte Carlo Tree Search engine
//! with pluggable policies (`mcts`), and an MTD(f) iterative-deepening
//! alpha-beta search with a transposition table (`alphabeta`). The
//! `players` module wires both search engines behind a common `Player`
//! trait for use by a driver.

#[macro_use]
extern crate lazy_static;

pub mod error;
pub mod value;
pub mod representation;
pub mod symmetry;
pub mod mcts;
pub mod alphabeta;
pub mod players;

pub use error::EngineError;
pub use representation::{Move, Payoffs, Phase, Piece, Player as Side, Square, State};

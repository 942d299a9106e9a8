//! Shortest-path maze solving.
//!
//! This crate finds the shortest route between the entry and exit of a
//! grid-based maze, expressed as a sequence of cardinal [`Direction`] moves.
//!
//! The maze itself is an external collaborator reached through the [`Maze`]
//! trait: all the solver needs is the entry/exit pair and, for any cell, the
//! ordered list of neighbors reachable through an open passage. Search is
//! plain breadth-first — every move costs one step, so the first time BFS
//! reaches the exit it has used the fewest moves possible.
//!
//! [`Solver`] memoises its result, so repeated queries are cheap until the
//! caller reports a maze change via [`Solver::invalidate`].
//!
//! [`Direction`]: amaze_core::Direction

mod solver;
mod traits;

pub use solver::Solver;
pub use traits::{Maze, Passage};

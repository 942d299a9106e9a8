//! **amaze-core** — foundational value types for grid mazes.
//!
//! This crate provides the two vocabulary types shared across the *amaze*
//! workspace: [`Cell`], a `(row, col)` grid position, and [`Direction`], the
//! four cardinal moves with their single-letter display symbols.

pub mod cell;
pub mod direction;

pub use cell::Cell;
pub use direction::Direction;

use amaze_core::{Cell, Direction};

/// An open passage out of a cell: the neighbor it leads to and the direction
/// of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passage {
    pub to: Cell,
    pub dir: Direction,
}

/// Minimal maze interface — designated endpoints plus open-neighbor
/// enumeration.
///
/// The solver never mutates the maze; all three methods must be pure
/// queries. `open_neighbors` must yield neighbors in a deterministic order
/// (N, E, S, W via [`Direction::ALL`] is the convention) — among equal-length
/// shortest paths, the one returned is decided by first discovery, so an
/// unstable order makes results irreproducible.
pub trait Maze {
    /// The designated start cell, fixed for the maze's lifetime.
    fn entry(&self) -> Cell;

    /// The designated goal cell, fixed for the maze's lifetime.
    fn exit(&self) -> Cell;

    /// Append every neighbor of `cell` reachable through an open passage
    /// into `buf`. The caller clears `buf` before calling. Walled-off
    /// adjacent cells must not appear.
    fn open_neighbors(&self, cell: Cell, buf: &mut Vec<Passage>);
}

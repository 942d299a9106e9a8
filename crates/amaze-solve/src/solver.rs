use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

use amaze_core::{Cell, Direction};
use log::{debug, trace};

use crate::traits::{Maze, Passage};

/// Cached shortest-path solver for one maze instance.
///
/// `solve` runs breadth-first search from the maze's entry to its exit and
/// memoises the result (including the empty "no path" result), so repeated
/// queries are cheap. Callers that mutate the maze must call
/// [`invalidate`](Solver::invalidate) before the next query — the cache is
/// keyed only by "has a result been computed", not by maze content.
///
/// The cache lives behind a mutex, so one `Solver` may be shared across
/// threads when its maze supports concurrent reads.
pub struct Solver<M: Maze> {
    maze: M,
    cache: Mutex<Option<Vec<Direction>>>,
}

impl<M: Maze> Solver<M> {
    /// Bind a solver to a maze. The cache starts empty.
    pub fn new(maze: M) -> Self {
        Self {
            maze,
            cache: Mutex::new(None),
        }
    }

    /// The bound maze.
    #[inline]
    pub fn maze(&self) -> &M {
        &self.maze
    }

    /// The shortest entry→exit path as an ordered sequence of moves.
    ///
    /// Returns the cached path if one has been computed; otherwise searches,
    /// stores the result and returns it. An empty path means the exit is
    /// unreachable — or that entry equals exit; callers that need to tell
    /// those apart compare [`Maze::entry`] and [`Maze::exit`] themselves.
    pub fn solve(&self) -> Vec<Direction> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(path) = cache.as_ref() {
            trace!("cache hit: {} moves", path.len());
            return path.clone();
        }
        let path = self.search();
        *cache = Some(path.clone());
        path
    }

    /// The solved path as a string of direction symbols, e.g. `"ESSE"`.
    ///
    /// Solves first if no result is cached. Empty iff no path exists.
    pub fn path_as_string(&self) -> String {
        self.solve().iter().map(|d| d.symbol()).collect()
    }

    /// Drop the cached path so the next query recomputes from scratch.
    ///
    /// A no-op when nothing is cached.
    pub fn invalidate(&self) {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        *cache = None;
    }

    /// Breadth-first search over the maze's open-passage graph.
    ///
    /// Every move costs one step, so the first time the exit is dequeued the
    /// path to it uses the fewest moves possible. First discovery wins: a
    /// cell already in the visited map is never re-parented, which both
    /// preserves shortest-path correctness and bounds the search to one
    /// visit per cell.
    fn search(&self) -> Vec<Direction> {
        let entry = self.maze.entry();
        let exit = self.maze.exit();

        // Visited map: cell -> (parent, move taken from parent).
        // The entry has no parent.
        let mut visited: HashMap<Cell, Option<(Cell, Direction)>> = HashMap::new();
        visited.insert(entry, None);

        let mut queue: VecDeque<Cell> = VecDeque::new();
        queue.push_back(entry);

        let mut nbuf: Vec<Passage> = Vec::with_capacity(4);

        while let Some(current) = queue.pop_front() {
            if current == exit {
                let path = reconstruct(&visited, exit);
                debug!(
                    "found {}-move path, {} cells visited",
                    path.len(),
                    visited.len()
                );
                return path;
            }

            nbuf.clear();
            self.maze.open_neighbors(current, &mut nbuf);

            for &Passage { to, dir } in nbuf.iter() {
                if visited.contains_key(&to) {
                    continue;
                }
                visited.insert(to, Some((current, dir)));
                queue.push_back(to);
            }
        }

        debug!(
            "exit {exit} unreachable from entry {entry}, {} cells visited",
            visited.len()
        );
        Vec::new()
    }
}

/// Walk the visit records from the exit back to the entry, then reverse so
/// the moves read entry→exit.
fn reconstruct(visited: &HashMap<Cell, Option<(Cell, Direction)>>, exit: Cell) -> Vec<Direction> {
    let mut path = Vec::new();
    let mut current = exit;
    while let Some(&Some((parent, dir))) = visited.get(&current) {
        path.push(dir);
        current = parent;
    }
    path.reverse();
    path
}

//! Depth-first knight path search.
//!
//! The search walks knight moves from a route's start cell, keeping the
//! running score, and succeeds when it stands on the end cell with a score
//! equal to the target. Branches are cut as soon as their score exceeds the
//! target, when they step off the grid or onto a cell already on the path.
//!
//! The end cell is terminal: arriving there with the wrong score fails the
//! branch, and no moves are tried from it.

mod state;
mod visited;

use knight_moves_core::{
    Grid, Path, Position, Route, Score, WeightAssignment, GRID_SIZE, KNIGHT_OFFSETS,
};

use crate::statistics::SearchStatistics;

pub use state::SearchState;
pub use visited::VisitedSet;


/// Exhaustive depth-first search for a path of exact score.
///
/// Offsets are tried in [`KNIGHT_OFFSETS`] order and the first path found is
/// returned; it is not necessarily the shortest.
///
/// # Example
///
/// ```
/// use knight_moves_core::{Grid, Position, Route, WeightAssignment};
/// use knight_moves_solver::PathSearch;
///
/// let grid = Grid::reference();
/// let route = Route::new(Position::new(0, 0), Position::new(2, 1));
///
/// // a6 and b4 are both labeled A: 2 + 2 = 4 on the direct hop.
/// let mut search = PathSearch::new(&grid, WeightAssignment::new(2, 3, 5), 4);
/// let path = search.find_path(&route).unwrap();
/// assert_eq!(path.to_string(), "a6,b4");
/// ```
#[derive(Debug)]
pub struct PathSearch<'a> {
    grid: &'a Grid,
    weights: WeightAssignment,
    target: Score,
    stats: SearchStatistics,
}

impl<'a> PathSearch<'a> {
    /// Creates a search over `grid` scored with `weights`.
    pub fn new(grid: &'a Grid, weights: WeightAssignment, target: Score) -> Self {
        Self {
            grid,
            weights,
            target,
            stats: SearchStatistics::default(),
        }
    }

    /// Searches for a path along `route` with fresh search buffers.
    pub fn find_path(&mut self, route: &Route) -> Option<Path> {
        let mut visited = VisitedSet::new();
        let mut path = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
        if self.search(route, &mut visited, &mut path) {
            Some(Path::new(path))
        } else {
            None
        }
    }

    /// Searches for a path along `route` using caller-owned buffers.
    ///
    /// `visited` and `path` must be empty. On success `path` holds the path
    /// found and `visited` its cells. On failure both are left holding only
    /// the start cell, every mark made while exploring having been undone.
    pub fn search(
        &mut self,
        route: &Route,
        visited: &mut VisitedSet,
        path: &mut Vec<Position>,
    ) -> bool {
        debug_assert!(visited.is_empty() && path.is_empty());

        visited.insert(route.start);
        path.push(route.start);

        let root = SearchState::start(self.grid, &self.weights, route.start);
        self.explore(root, route.end, visited, path)
    }

    /// Returns the counters accumulated by every search run so far.
    pub fn statistics(&self) -> SearchStatistics {
        self.stats
    }

    pub fn weights(&self) -> &WeightAssignment {
        &self.weights
    }

    pub fn target(&self) -> Score {
        self.target
    }

    fn explore(
        &mut self,
        state: SearchState,
        end: Position,
        visited: &mut VisitedSet,
        path: &mut Vec<Position>,
    ) -> bool {
        self.stats.nodes_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(state.depth());

        if state.position() == end {
            if state.score() == self.target {
                return true;
            }
            self.stats.missed_arrivals += 1;
            return false;
        }

        if state.score() > self.target {
            self.stats.pruned_by_score += 1;
            return false;
        }

        for &(dx, dy) in &KNIGHT_OFFSETS {
            let next = state.position().offset(dx, dy);
            if !next.is_valid() || visited.contains(next) {
                self.stats.rejected_moves += 1;
                continue;
            }

            let child = state.advance(self.grid, &self.weights, next);
            if child.score() > self.target {
                self.stats.pruned_by_score += 1;
                continue;
            }

            visited.insert(next);
            path.push(next);

            if self.explore(child, end, visited, path) {
                return true;
            }

            path.pop();
            visited.remove(next);
        }

        false
    }
}

//! Solver implementation.
//!
//! Logging levels:
//! - **INFO**: Solve start/end and one line per weight assignment attempted
//! - **DEBUG**: Outcome of each route search

use std::time::{Duration, Instant};

use knight_moves_core::{Path, Puzzle, Route, WeightAssignment};
use tracing::{debug, info};

use crate::enumerator::WeightEnumerator;
use crate::search::PathSearch;
use crate::statistics::SearchStatistics;

/// A weight assignment together with a path for each route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub weights: WeightAssignment,
    /// Paths in route order.
    pub paths: [Path; 2],
}

/// Outcome of trying one weight assignment.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub weights: WeightAssignment,
    /// Both paths, or `None` if any route has no path.
    pub paths: Option<[Path; 2]>,
    pub stats: SearchStatistics,
    pub duration: Duration,
}

impl Attempt {
    pub fn is_success(&self) -> bool {
        self.paths.is_some()
    }

    /// Converts a successful attempt into a solution.
    pub fn into_solution(self) -> Option<Solution> {
        let weights = self.weights;
        self.paths.map(|paths| Solution { weights, paths })
    }
}

/// Result of a full solve.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// The first solution in enumeration order, if any.
    pub solution: Option<Solution>,
    /// Number of weight assignments attempted.
    pub candidates: u64,
    /// Counters summed over every attempt.
    pub stats: SearchStatistics,
    pub duration: Duration,
}

impl SolveReport {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Enumerates weight assignments and searches both routes for each.
///
/// # Example
///
/// ```
/// use knight_moves_core::{Grid, Label, Position, Puzzle, Route, WeightAssignment, GRID_SIZE};
/// use knight_moves_solver::KnightSolver;
///
/// // Every cell labeled A: a path of n cells scores n * A.
/// let grid = Grid::new([[Label::A; GRID_SIZE]; GRID_SIZE]);
/// let routes = [
///     Route::new(Position::new(0, 0), Position::new(2, 1)),
///     Route::new(Position::new(5, 0), Position::new(3, 1)),
/// ];
/// let puzzle = Puzzle::new(grid, routes, 2, 10).unwrap();
///
/// let report = KnightSolver::new(puzzle).solve();
/// let solution = report.solution.unwrap();
/// assert_eq!(solution.weights, WeightAssignment::new(1, 2, 3));
/// assert_eq!(solution.paths[0].to_string(), "a6,b4");
/// ```
#[derive(Debug, Clone)]
pub struct KnightSolver {
    puzzle: Puzzle,
}

impl KnightSolver {
    pub fn new(puzzle: Puzzle) -> Self {
        Self { puzzle }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Iterates over the weight assignments this solver tries, in order.
    pub fn candidates(&self) -> WeightEnumerator {
        WeightEnumerator::new(self.puzzle.weight_ceiling())
    }

    /// Searches both routes under `weights`.
    ///
    /// Each route gets its own search buffers. The second route is only
    /// searched when the first succeeds.
    pub fn attempt(&self, weights: WeightAssignment) -> Attempt {
        let start = Instant::now();
        let grid = self.puzzle.grid();
        let target = self.puzzle.target_score();
        let [first, second] = self.puzzle.routes();

        let mut stats = SearchStatistics::default();
        let mut search_route = |route: &Route| {
            let mut search = PathSearch::new(grid, weights, target);
            let path = search.find_path(route);
            let route_stats = search.statistics();
            debug!(
                event = "route",
                route = %route,
                found = path.is_some(),
                nodes = route_stats.nodes_expanded,
                pruned = route_stats.pruned_by_score,
                depth = route_stats.max_depth as u64,
            );
            stats += route_stats;
            path
        };

        let paths = search_route(first).and_then(|first_path| {
            search_route(second).map(|second_path| [first_path, second_path])
        });

        Attempt {
            weights,
            paths,
            stats,
            duration: start.elapsed(),
        }
    }

    /// Runs the full enumeration, stopping at the first success.
    pub fn solve(&self) -> SolveReport {
        let start = Instant::now();

        info!(
            event = "solve_start",
            target_score = self.puzzle.target_score(),
            weight_ceiling = self.puzzle.weight_ceiling() as u64,
            route_count = self.puzzle.routes().len() as u64,
        );

        let mut candidates = 0u64;
        let mut stats = SearchStatistics::default();
        let mut solution = None;

        for weights in self.candidates() {
            candidates += 1;
            let attempt = self.attempt(weights);
            stats += attempt.stats;

            info!(
                event = "attempt",
                a = weights.a as u64,
                b = weights.b as u64,
                c = weights.c as u64,
                found = attempt.is_success(),
                nodes = attempt.stats.nodes_expanded,
                duration_us = attempt.duration.as_micros() as u64,
            );

            if let Some(found) = attempt.into_solution() {
                solution = Some(found);
                break;
            }
        }

        let duration = start.elapsed();
        info!(
            event = "solve_end",
            found = solution.is_some(),
            candidates = candidates,
            nodes = stats.nodes_expanded,
            duration_us = duration.as_micros() as u64,
        );

        SolveReport {
            solution,
            candidates,
            stats,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_moves_test::{reference_grid_puzzle, uniform_puzzle};

    #[test]
    fn test_solves_single_hops() {
        let report = KnightSolver::new(uniform_puzzle(2, 10)).solve();
        let solution = report.solution.unwrap();

        assert_eq!(solution.weights, WeightAssignment::new(1, 2, 3));
        assert_eq!(solution.paths[0].to_string(), "a6,b4");
        assert_eq!(solution.paths[1].to_string(), "a1,b3");
        assert_eq!(report.candidates, 1);
    }

    #[test]
    fn test_solution_paths_verify() {
        let puzzle = uniform_puzzle(6, 10);
        let report = KnightSolver::new(puzzle.clone()).solve();
        let solution = report.solution.unwrap();

        assert_eq!(solution.weights, WeightAssignment::new(1, 2, 3));
        for (path, route) in solution.paths.iter().zip(puzzle.routes()) {
            assert_eq!(path.len(), 6);
            assert_eq!(
                path.verify(puzzle.grid(), &solution.weights, route, 6),
                Ok(6)
            );
        }
    }

    #[test]
    fn test_reports_no_solution() {
        let ceiling = 10;
        let report = KnightSolver::new(uniform_puzzle(3, ceiling)).solve();

        assert!(!report.is_solved());
        assert_eq!(
            report.candidates,
            WeightEnumerator::new(ceiling).count() as u64
        );
        assert!(report.stats.nodes_expanded > 0);
    }

    #[test]
    fn test_empty_enumeration_reports_no_solution() {
        let report = KnightSolver::new(uniform_puzzle(2, 5)).solve();
        assert!(report.solution.is_none());
        assert_eq!(report.candidates, 0);
    }

    #[test]
    fn test_returns_first_assignment_in_order() {
        let puzzle = reference_grid_puzzle(24, 9);
        let solver = KnightSolver::new(puzzle.clone());

        let expected = solver.candidates().find(|&weights| {
            puzzle.routes().iter().all(|route| {
                PathSearch::new(puzzle.grid(), weights, puzzle.target_score())
                    .find_path(route)
                    .is_some()
            })
        });

        let report = solver.solve();
        assert_eq!(report.solution.map(|s| s.weights), expected);
    }

    #[test]
    fn test_deterministic() {
        let solver = KnightSolver::new(reference_grid_puzzle(24, 9));
        let first = solver.solve().solution;
        let second = solver.solve().solution;
        assert_eq!(first, second);
    }

    #[test]
    fn test_attempt_skips_second_route_on_failure() {
        let puzzle = uniform_puzzle(3, 10);
        let weights = WeightAssignment::new(1, 2, 3);

        let mut first_only = PathSearch::new(puzzle.grid(), weights, 3);
        assert!(first_only.find_path(&puzzle.routes()[0]).is_none());

        let attempt = KnightSolver::new(puzzle.clone()).attempt(weights);
        assert!(!attempt.is_success());
        assert_eq!(attempt.stats, first_only.statistics());
        assert!(attempt.into_solution().is_none());
    }
}

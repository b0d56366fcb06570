//! Knight Moves - a weighted knight path puzzle solver
//!
//! Assign distinct positive weights to the labels `A`, `B` and `C` of a 6×6
//! grid so that two knight paths, `a6 → f1` and `a1 → f6`, each score
//! exactly 2024.
//!
//! # Example
//!
//! ```rust
//! use knight_moves::prelude::*;
//!
//! let weights = WeightAssignment::new(1, 2, 3);
//! let path = Path::new(vec![Position::new(0, 0), Position::new(2, 1)]);
//! assert_eq!(path.to_string(), "a6,b4");
//! assert_eq!(score_trace(&Grid::reference(), &weights, path.positions()), vec![1, 2]);
//! ```

// Domain types
pub use knight_moves_core::{
    score_trace, Grid, KnightMovesError, Label, Path, PathViolation, Position, Puzzle, Route,
    Score, ScoreAccumulator, WeightAssignment, GRID_SIZE, KNIGHT_OFFSETS,
};

// Configuration
pub use knight_moves_config::{ConfigError, PuzzleConfig, RouteConfig};

// Search engine
pub use knight_moves_solver::{
    load_puzzle, Attempt, KnightSolver, PathSearch, SearchStatistics, SolveError, SolveReport,
    Solution, WeightEnumerator, CONFIG_FILE,
};

mod report;
mod solver;

pub use report::render_report;
pub use solver::run_solver;

pub mod prelude {
    pub use super::{
        score_trace, Grid, Label, Path, Position, Puzzle, Route, Score, WeightAssignment,
    };
    pub use super::{KnightSolver, PuzzleConfig, SolveReport, Solution};
}

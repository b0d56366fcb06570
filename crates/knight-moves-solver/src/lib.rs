//! Knight Moves Solver Engine
//!
//! This crate provides the search procedure:
//! - Weight enumeration in ascending lexicographic order
//! - Depth-first knight path search with score pruning
//! - The solver that combines both and reports progress via `tracing`
//! - Search statistics
//! - Config-file wiring (basic module)

pub mod basic;
pub mod enumerator;
pub mod search;
pub mod solver;
pub mod statistics;

pub use basic::{load_puzzle, run_solver, SolveError, CONFIG_FILE};
pub use enumerator::WeightEnumerator;
pub use search::{PathSearch, SearchState, VisitedSet};
pub use solver::{Attempt, KnightSolver, SolveReport, Solution};
pub use statistics::SearchStatistics;

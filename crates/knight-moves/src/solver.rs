//! Solver entry point that hides all internal wiring.

use knight_moves_core::Puzzle;
use knight_moves_solver::{SolveError, SolveReport};

/// Sets up console output and solves the configured puzzle.
///
/// The puzzle comes from [`CONFIG_FILE`](crate::CONFIG_FILE) in the working
/// directory, or is the published instance when that file is absent.
pub fn run_solver() -> Result<(Puzzle, SolveReport), SolveError> {
    #[cfg(feature = "console")]
    knight_moves_console::init();

    knight_moves_solver::run_solver()
}

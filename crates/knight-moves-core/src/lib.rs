//! Knight Moves Core - Domain types and the scoring rule
//!
//! This crate provides the fundamental abstractions for the knight moves solver:
//! - Labels, the fixed 6×6 grid and grid positions
//! - Knight-move paths and their verification
//! - Weight assignments and the puzzle configuration they are searched against
//! - The path scoring rule

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{
    Grid, Label, Path, Position, Puzzle, Route, WeightAssignment, GRID_SIZE, KNIGHT_OFFSETS,
};
pub use error::{KnightMovesError, PathViolation};
pub use score::{score_trace, Score, ScoreAccumulator};

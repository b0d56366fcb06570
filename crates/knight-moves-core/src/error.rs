//! Error types for the knight moves solver

use thiserror::Error;

use crate::domain::Position;
use crate::score::Score;

/// Main error type for domain construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnightMovesError {
    /// A grid cell holds a character outside the label alphabet
    #[error("Invalid label '{label}' at row {row}, column {column}")]
    InvalidLabel {
        label: char,
        row: usize,
        column: usize,
    },

    /// The grid does not have the required dimensions
    #[error("Invalid grid shape: {0}")]
    GridShape(String),

    /// A position lies outside the grid
    #[error("Position {0:?} is outside the grid")]
    InvalidPosition(Position),

    /// A cell name could not be parsed as algebraic notation
    #[error("Invalid cell notation: {0:?}")]
    InvalidNotation(String),

    /// Weights are not positive, not pairwise distinct, or exceed the ceiling
    #[error("Inadmissible weights A={a}, B={b}, C={c} (ceiling {ceiling})")]
    InadmissibleWeights { a: u32, b: u32, c: u32, ceiling: u32 },

    /// The target score is not positive
    #[error("Target score must be positive, got {0}")]
    InvalidTarget(Score),
}

/// Reasons a path fails independent verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathViolation {
    #[error("Path is empty")]
    Empty,

    #[error("Path starts at {actual} instead of {expected}")]
    WrongStart { expected: Position, actual: Position },

    #[error("Path ends at {actual} instead of {expected}")]
    WrongEnd { expected: Position, actual: Position },

    #[error("Position {0:?} is outside the grid")]
    OutOfBounds(Position),

    #[error("Position {position} is visited twice (step {step})")]
    Revisit { position: Position, step: usize },

    #[error("Step {step} from {from} to {to} is not a knight move")]
    NotKnightMove {
        from: Position,
        to: Position,
        step: usize,
    },

    #[error("Score {score} exceeds target {target} at step {step}")]
    ExceedsTarget {
        score: Score,
        target: Score,
        step: usize,
    },

    #[error("Final score {actual} does not equal target {target}")]
    WrongScore { actual: Score, target: Score },
}

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, KnightMovesError>;

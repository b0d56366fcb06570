//! Search state representation.
//!
//! Each state is one step of the depth-first walk: where the knight stands
//! and the running score that brought it there.

use knight_moves_core::{Grid, Label, Position, Score, ScoreAccumulator, WeightAssignment};

/// A state in the depth-first path search.
///
/// The previous label is kept explicitly: it is the label of the most
/// recently visited cell, which is `position`'s own label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    /// Cell the knight currently stands on.
    position: Position,

    /// Score so far and the label that decides the next step's operation.
    accumulator: ScoreAccumulator,

    /// Number of cells on the path, the start cell included.
    depth: usize,
}

impl SearchState {
    /// Creates the initial state on `start`.
    pub fn start(grid: &Grid, weights: &WeightAssignment, start: Position) -> Self {
        Self {
            position: start,
            accumulator: ScoreAccumulator::start(grid.label_at(start), weights),
            depth: 1,
        }
    }

    /// Returns the state after moving to `next`.
    #[inline]
    pub fn advance(&self, grid: &Grid, weights: &WeightAssignment, next: Position) -> Self {
        Self {
            position: next,
            accumulator: self.accumulator.step(grid.label_at(next), weights),
            depth: self.depth + 1,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.accumulator.score()
    }

    #[inline]
    pub fn prev_label(&self) -> Label {
        self.accumulator.prev_label()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

//! Path scoring
//!
//! A path's score starts at the weight of its first cell. Each further cell
//! with label `L` either multiplies the score by `weight(L)`, when `L` differs
//! from the label of the previously visited cell, or adds `weight(L)` when the
//! two labels are equal.

use crate::domain::{Grid, Label, Position, WeightAssignment};

#[cfg(test)]
mod tests;

/// Integer score accumulated along a path.
pub type Score = i64;

/// Running score of a partial path.
///
/// Holds the score so far and the label of the most recently visited cell,
/// which decides whether the next step multiplies or adds.
///
/// # Examples
///
/// ```
/// use knight_moves_core::{Label, ScoreAccumulator, WeightAssignment};
///
/// let weights = WeightAssignment::new(3, 5, 7);
/// let acc = ScoreAccumulator::start(Label::A, &weights);
/// assert_eq!(acc.score(), 3);
///
/// let acc = acc.step(Label::A, &weights);
/// assert_eq!(acc.score(), 6);
///
/// let acc = acc.step(Label::B, &weights);
/// assert_eq!(acc.score(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreAccumulator {
    score: Score,
    prev_label: Label,
}

impl ScoreAccumulator {
    /// Starts accumulating on a cell labeled `label`.
    #[inline]
    pub fn start(label: Label, weights: &WeightAssignment) -> Self {
        ScoreAccumulator {
            score: weights.weight(label),
            prev_label: label,
        }
    }

    /// Creates an accumulator from explicit parts.
    #[inline]
    pub const fn from_parts(score: Score, prev_label: Label) -> Self {
        ScoreAccumulator { score, prev_label }
    }

    /// Returns the accumulator after visiting a cell labeled `label`.
    ///
    /// Arithmetic saturates, so an overflowing score still compares above any
    /// target and gets pruned.
    #[inline]
    pub fn step(self, label: Label, weights: &WeightAssignment) -> Self {
        let weight = weights.weight(label);
        let score = if label != self.prev_label {
            self.score.saturating_mul(weight)
        } else {
            self.score.saturating_add(weight)
        };
        ScoreAccumulator {
            score,
            prev_label: label,
        }
    }

    /// The score so far.
    #[inline]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Label of the most recently visited cell.
    #[inline]
    pub const fn prev_label(&self) -> Label {
        self.prev_label
    }
}

/// Returns the score after each prefix of `positions`.
///
/// The first entry is the weight of the first cell; the last entry is the
/// score of the whole path. An empty slice yields an empty trace.
///
/// # Panics
///
/// Panics if a position is off-grid.
pub fn score_trace(grid: &Grid, weights: &WeightAssignment, positions: &[Position]) -> Vec<Score> {
    let mut trace = Vec::with_capacity(positions.len());
    let mut iter = positions.iter();
    let Some(&first) = iter.next() else {
        return trace;
    };

    let mut acc = ScoreAccumulator::start(grid.label_at(first), weights);
    trace.push(acc.score());
    for &position in iter {
        acc = acc.step(grid.label_at(position), weights);
        trace.push(acc.score());
    }
    trace
}

//! Label weights.

use std::fmt;

use super::label::Label;
use crate::error::KnightMovesError;
use crate::score::Score;

/// Maps each label to a positive integer weight.
///
/// An assignment is admissible under a ceiling when every weight is at least
/// one, the three weights are pairwise distinct and their sum does not exceed
/// the ceiling.
///
/// # Examples
///
/// ```
/// use knight_moves_core::{Label, WeightAssignment};
///
/// let weights = WeightAssignment::new(1, 3, 2);
/// assert_eq!(weights.weight(Label::B), 3);
/// assert!(weights.is_admissible(50));
/// assert!(!WeightAssignment::new(2, 2, 1).is_admissible(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightAssignment {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl WeightAssignment {
    /// Creates an assignment without checking admissibility.
    #[inline]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        WeightAssignment { a, b, c }
    }

    /// Creates an assignment, rejecting it unless it is admissible under `ceiling`.
    pub fn try_new(a: u32, b: u32, c: u32, ceiling: u32) -> Result<Self, KnightMovesError> {
        let weights = WeightAssignment::new(a, b, c);
        if weights.is_admissible(ceiling) {
            Ok(weights)
        } else {
            Err(KnightMovesError::InadmissibleWeights { a, b, c, ceiling })
        }
    }

    /// Returns the weight of `label` as a score operand.
    #[inline]
    pub const fn weight(&self, label: Label) -> Score {
        match label {
            Label::A => self.a as Score,
            Label::B => self.b as Score,
            Label::C => self.c as Score,
        }
    }

    /// Sum of the three weights.
    #[inline]
    pub const fn sum(&self) -> u64 {
        self.a as u64 + self.b as u64 + self.c as u64
    }

    /// Returns true if the three weights are pairwise distinct.
    pub const fn is_distinct(&self) -> bool {
        self.a != self.b && self.a != self.c && self.b != self.c
    }

    /// Returns true if the assignment may be searched under `ceiling`.
    pub const fn is_admissible(&self, ceiling: u32) -> bool {
        self.a >= 1
            && self.b >= 1
            && self.c >= 1
            && self.is_distinct()
            && self.sum() <= ceiling as u64
    }
}

impl fmt::Display for WeightAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A={}, B={}, C={}", self.a, self.b, self.c)
    }
}

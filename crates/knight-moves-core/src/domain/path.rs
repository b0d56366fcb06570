//! Knight-move paths.

use std::collections::HashSet;
use std::fmt;

use super::grid::Grid;
use super::position::Position;
use super::puzzle::Route;
use super::weights::WeightAssignment;
use crate::error::PathViolation;
use crate::score::{Score, ScoreAccumulator};

/// An ordered sequence of grid positions.
///
/// Paths produced by the search start at a route's start cell, move by
/// knight moves only and never revisit a cell. [`Path::verify`] checks all of
/// this independently of the search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    positions: Vec<Position>,
}

impl Path {
    pub fn new(positions: Vec<Position>) -> Self {
        Path { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn start(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    /// Checks the path against `route` and returns its final score.
    ///
    /// The path must start and end on the route's cells, stay on the grid,
    /// never revisit a cell, advance by knight moves only, never exceed
    /// `target` on any prefix and finish exactly on `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use knight_moves_core::{Grid, Path, PathViolation, Position, Route, WeightAssignment};
    ///
    /// let grid = Grid::reference();
    /// let weights = WeightAssignment::new(1, 2, 3);
    /// let route = Route::new(Position::new(0, 0), Position::new(2, 1));
    /// let path = Path::new(vec![Position::new(0, 0), Position::new(2, 1)]);
    ///
    /// // a6 (A, weight 1) then b4 (A): 1 + 1 = 2
    /// assert_eq!(path.verify(&grid, &weights, &route, 2), Ok(2));
    /// assert!(matches!(
    ///     path.verify(&grid, &weights, &route, 3),
    ///     Err(PathViolation::WrongScore { actual: 2, target: 3 })
    /// ));
    /// ```
    pub fn verify(
        &self,
        grid: &Grid,
        weights: &WeightAssignment,
        route: &Route,
        target: Score,
    ) -> Result<Score, PathViolation> {
        let (Some(first), Some(last)) = (self.start(), self.end()) else {
            return Err(PathViolation::Empty);
        };
        if first != route.start {
            return Err(PathViolation::WrongStart {
                expected: route.start,
                actual: first,
            });
        }
        if last != route.end {
            return Err(PathViolation::WrongEnd {
                expected: route.end,
                actual: last,
            });
        }

        let mut seen = HashSet::with_capacity(self.positions.len());
        let mut acc: Option<ScoreAccumulator> = None;
        let mut previous: Option<Position> = None;

        for (step, &position) in self.positions.iter().enumerate() {
            if !position.is_valid() {
                return Err(PathViolation::OutOfBounds(position));
            }
            if !seen.insert(position) {
                return Err(PathViolation::Revisit { position, step });
            }
            if let Some(from) = previous {
                if !from.is_knight_move_to(&position) {
                    return Err(PathViolation::NotKnightMove {
                        from,
                        to: position,
                        step,
                    });
                }
            }

            let label = grid.label_at(position);
            let next = match acc {
                None => ScoreAccumulator::start(label, weights),
                Some(acc) => acc.step(label, weights),
            };
            if next.score() > target {
                return Err(PathViolation::ExceedsTarget {
                    score: next.score(),
                    target,
                    step,
                });
            }

            acc = Some(next);
            previous = Some(position);
        }

        let actual = acc.map_or(0, |acc| acc.score());
        if actual == target {
            Ok(actual)
        } else {
            Err(PathViolation::WrongScore { actual, target })
        }
    }
}

impl From<Vec<Position>> for Path {
    fn from(positions: Vec<Position>) -> Self {
        Path::new(positions)
    }
}

impl fmt::Display for Path {
    /// Writes the cells in algebraic notation, separated by commas.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", position)?;
        }
        Ok(())
    }
}

//! Puzzle configuration.

use std::fmt;

use super::grid::Grid;
use super::position::Position;
use crate::error::KnightMovesError;
use crate::score::Score;

/// A start and end cell that a path must connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub start: Position,
    pub end: Position,
}

impl Route {
    pub const fn new(start: Position, end: Position) -> Self {
        Route { start, end }
    }

    /// Parses a route from two cells in algebraic notation.
    pub fn from_algebraic(start: &str, end: &str) -> Result<Self, KnightMovesError> {
        Ok(Route::new(
            Position::from_algebraic(start)?,
            Position::from_algebraic(end)?,
        ))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Immutable description of one puzzle instance.
///
/// Holds the grid, the two routes that must both be completed under the same
/// weights, the exact score each path must reach and the ceiling on the sum
/// of the weights.
///
/// # Examples
///
/// ```
/// use knight_moves_core::{Position, Puzzle};
///
/// let puzzle = Puzzle::reference();
/// assert_eq!(puzzle.target_score(), 2024);
/// assert_eq!(puzzle.weight_ceiling(), 50);
/// assert_eq!(puzzle.routes()[0].start, Position::new(0, 0));
/// assert_eq!(puzzle.routes()[1].to_string(), "a1 to f6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    routes: [Route; 2],
    target_score: Score,
    weight_ceiling: u32,
}

impl Puzzle {
    /// Score every path of the published puzzle must reach.
    pub const REFERENCE_TARGET: Score = 2024;

    /// Maximum sum of the three weights in the published puzzle.
    pub const REFERENCE_CEILING: u32 = 50;

    /// Creates a puzzle, checking that routes are on the grid and the target is positive.
    pub fn new(
        grid: Grid,
        routes: [Route; 2],
        target_score: Score,
        weight_ceiling: u32,
    ) -> Result<Self, KnightMovesError> {
        for route in &routes {
            for position in [route.start, route.end] {
                if !position.is_valid() {
                    return Err(KnightMovesError::InvalidPosition(position));
                }
            }
        }
        if target_score <= 0 {
            return Err(KnightMovesError::InvalidTarget(target_score));
        }

        Ok(Puzzle {
            grid,
            routes,
            target_score,
            weight_ceiling,
        })
    }

    /// The published instance: reference grid, `a6 → f1` and `a1 → f6`,
    /// target 2024, weight ceiling 50.
    pub fn reference() -> Self {
        Puzzle {
            grid: Grid::reference(),
            routes: Self::reference_routes(),
            target_score: Self::REFERENCE_TARGET,
            weight_ceiling: Self::REFERENCE_CEILING,
        }
    }

    /// Corner-to-corner routes of the published puzzle.
    pub const fn reference_routes() -> [Route; 2] {
        [
            Route::new(Position::new(0, 0), Position::new(5, 5)),
            Route::new(Position::new(5, 0), Position::new(0, 5)),
        ]
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn routes(&self) -> &[Route; 2] {
        &self.routes
    }

    pub fn target_score(&self) -> Score {
        self.target_score
    }

    pub fn weight_ceiling(&self) -> u32 {
        self.weight_ceiling
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Puzzle::reference()
    }
}

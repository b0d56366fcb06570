//! Grid coordinates and knight moves.

use std::fmt;
use std::str::FromStr;

use super::grid::GRID_SIZE;
use crate::error::KnightMovesError;

/// The eight knight displacements `(dx, dy)` in search order.
///
/// The order is part of the search contract: the first depth-first solution
/// found in this order is the one reported.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// A grid coordinate.
///
/// `x` is the row counted from the top, `y` the column counted from the left.
/// Positions may be constructed off-grid (for instance as the target of a
/// knight offset); [`Position::is_valid`] tells whether they lie on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a position. No bounds check is made.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Returns true if both coordinates lie within `[0, GRID_SIZE)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use knight_moves_core::Position;
    ///
    /// assert!(Position::new(0, 0).is_valid());
    /// assert!(Position::new(5, 5).is_valid());
    /// assert!(!Position::new(6, 0).is_valid());
    /// assert!(!Position::new(0, -1).is_valid());
    /// ```
    #[inline]
    pub const fn is_valid(&self) -> bool {
        let size = GRID_SIZE as i32;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }

    /// Returns the position displaced by `(dx, dy)`.
    #[inline]
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Iterates over the on-grid knight destinations, in [`KNIGHT_OFFSETS`] order.
    pub fn knight_moves(self) -> impl Iterator<Item = Position> {
        KNIGHT_OFFSETS
            .iter()
            .map(move |&(dx, dy)| self.offset(dx, dy))
            .filter(Position::is_valid)
    }

    /// Returns true if `other` is one knight move away.
    pub fn is_knight_move_to(&self, other: &Position) -> bool {
        let dx = (other.x - self.x).abs();
        let dy = (other.y - self.y).abs();
        (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
    }

    /// Row-major index into a `GRID_SIZE × GRID_SIZE` array.
    ///
    /// # Panics
    ///
    /// Panics if the position is off-grid.
    #[inline]
    pub fn index(&self) -> (usize, usize) {
        assert!(self.is_valid(), "position {:?} is outside the grid", self);
        (self.x as usize, self.y as usize)
    }

    /// Parses algebraic notation: a column letter `a..f` followed by a row
    /// number `1..6`, where row `6` is `x = 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use knight_moves_core::Position;
    ///
    /// assert_eq!(Position::from_algebraic("a6").unwrap(), Position::new(0, 0));
    /// assert_eq!(Position::from_algebraic("f1").unwrap(), Position::new(5, 5));
    /// assert!(Position::from_algebraic("g1").is_err());
    /// ```
    pub fn from_algebraic(cell: &str) -> Result<Self, KnightMovesError> {
        let invalid = || KnightMovesError::InvalidNotation(cell.to_string());

        let mut chars = cell.trim().chars();
        let (Some(column), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let column = column.to_ascii_lowercase();
        if !column.is_ascii_lowercase() {
            return Err(invalid());
        }
        let y = column as i32 - 'a' as i32;
        let row = row.to_digit(10).ok_or_else(invalid)? as i32;
        let x = GRID_SIZE as i32 - row;

        let position = Position::new(x, y);
        if position.is_valid() {
            Ok(position)
        } else {
            Err(invalid())
        }
    }

    /// Formats the position in algebraic notation, e.g. `a6`.
    pub fn to_algebraic(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Position {
    /// Writes algebraic notation for on-grid positions and `(x, y)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({}, {})", self.x, self.y);
        }
        let column = (b'a' + self.y as u8) as char;
        let row = GRID_SIZE as i32 - self.x;
        write!(f, "{}{}", column, row)
    }
}

impl FromStr for Position {
    type Err = KnightMovesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s)
    }
}

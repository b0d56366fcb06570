//! The fixed-size labeled grid.

use std::fmt;

use super::label::Label;
use super::position::Position;
use crate::error::KnightMovesError;

/// Side length of the square grid.
pub const GRID_SIZE: usize = 6;

/// Immutable `GRID_SIZE × GRID_SIZE` matrix of labels, indexed `[x][y]`.
///
/// # Examples
///
/// ```
/// use knight_moves_core::{Grid, Label, Position};
///
/// let grid = Grid::reference();
/// assert_eq!(grid.label_at(Position::new(0, 0)), Label::A);
/// assert_eq!(grid.label_at(Position::new(0, 5)), Label::C);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Label; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates a grid from a label matrix.
    pub const fn new(cells: [[Label; GRID_SIZE]; GRID_SIZE]) -> Self {
        Grid { cells }
    }

    /// The grid of the published puzzle.
    pub const fn reference() -> Self {
        use Label::{A, B, C};
        Grid::new([
            [A, B, B, C, C, C],
            [A, B, B, C, C, C],
            [A, A, B, B, C, C],
            [A, A, B, B, C, C],
            [A, A, A, B, B, C],
            [A, A, A, B, B, C],
        ])
    }

    /// Parses a grid from one string per row, top row first.
    ///
    /// Whitespace inside a row is ignored, so `"A B B C C C"` and `"ABBCCC"`
    /// are equivalent.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, KnightMovesError> {
        if rows.len() != GRID_SIZE {
            return Err(KnightMovesError::GridShape(format!(
                "expected {} rows, found {}",
                GRID_SIZE,
                rows.len()
            )));
        }

        let mut cells = [[Label::A; GRID_SIZE]; GRID_SIZE];
        for (row, text) in rows.iter().enumerate() {
            let letters: Vec<char> = text
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if letters.len() != GRID_SIZE {
                return Err(KnightMovesError::GridShape(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    letters.len(),
                    GRID_SIZE
                )));
            }
            for (column, &letter) in letters.iter().enumerate() {
                cells[row][column] = Label::from_char(letter).ok_or(
                    KnightMovesError::InvalidLabel {
                        label: letter,
                        row,
                        column,
                    },
                )?;
            }
        }

        Ok(Grid::new(cells))
    }

    /// Returns the label at `position`.
    ///
    /// # Panics
    ///
    /// Panics if the position is off-grid. Callers check bounds first.
    #[inline]
    pub fn label_at(&self, position: Position) -> Label {
        let (x, y) = position.index();
        self.cells[x][y]
    }

    /// Returns the label at `position`, or `None` if it is off-grid.
    pub fn get(&self, position: Position) -> Option<Label> {
        position.is_valid().then(|| self.label_at(position))
    }

    /// Returns the rows of the grid, top row first.
    pub fn rows(&self) -> &[[Label; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Renders each row as a string of label letters.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|label| label.as_char()).collect())
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::reference()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(Label::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

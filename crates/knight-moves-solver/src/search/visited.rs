//! Per-search visited set.

use knight_moves_core::{Position, GRID_SIZE};

/// Cells on the current path of one search.
///
/// Each search owns its own set; it is never shared between routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
    len: usize,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `position` is marked.
    ///
    /// # Panics
    ///
    /// Panics if `position` is off-grid.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        let (x, y) = position.index();
        self.cells[x][y]
    }

    /// Marks `position`. Returns false if it was already marked.
    #[inline]
    pub fn insert(&mut self, position: Position) -> bool {
        let (x, y) = position.index();
        let newly = !self.cells[x][y];
        if newly {
            self.cells[x][y] = true;
            self.len += 1;
        }
        newly
    }

    /// Unmarks `position`. Returns false if it was not marked.
    #[inline]
    pub fn remove(&mut self, position: Position) -> bool {
        let (x, y) = position.index();
        let present = self.cells[x][y];
        if present {
            self.cells[x][y] = false;
            self.len -= 1;
        }
        present
    }

    /// Number of marked cells.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

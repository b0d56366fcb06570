//! Puzzle fixtures.
//!
//! On a grid where every cell carries the same label every step adds the
//! weight, so a path of `n` cells scores `n * weight(A)`. A knight move always
//! changes square color, which makes the cell count of any path between the
//! [`short_routes`] endpoints even. That gives easy closed-form outcomes:
//!
//! - `uniform_puzzle(2, _)` is solved by `A=1, B=2, C=3` with single hops
//! - `uniform_puzzle(6, _)` is solved by `A=1, B=2, C=3` with six-cell paths
//! - `uniform_puzzle(3, _)` has no solution (three cells or one cell would be needed)

use knight_moves_core::{Grid, Label, Position, Puzzle, Route, Score, GRID_SIZE};

/// A grid whose every cell carries `label`.
pub fn uniform_grid(label: Label) -> Grid {
    Grid::new([[label; GRID_SIZE]; GRID_SIZE])
}

/// Two routes that are each a single knight move: `a6 → b4` and `a1 → b3`.
pub fn short_routes() -> [Route; 2] {
    [
        Route::new(Position::new(0, 0), Position::new(2, 1)),
        Route::new(Position::new(5, 0), Position::new(3, 1)),
    ]
}

/// An all-`A` grid with [`short_routes`].
///
/// # Panics
///
/// Panics if `target` is not positive.
pub fn uniform_puzzle(target: Score, weight_ceiling: u32) -> Puzzle {
    Puzzle::new(
        uniform_grid(Label::A),
        short_routes(),
        target,
        weight_ceiling,
    )
    .expect("fixture puzzle is valid")
}

/// The reference grid and routes with a custom target and ceiling.
///
/// # Panics
///
/// Panics if `target` is not positive.
pub fn reference_grid_puzzle(target: Score, weight_ceiling: u32) -> Puzzle {
    Puzzle::new(
        Grid::reference(),
        Puzzle::reference_routes(),
        target,
        weight_ceiling,
    )
    .expect("fixture puzzle is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_routes_are_single_hops() {
        for route in short_routes() {
            assert!(route.start.is_knight_move_to(&route.end));
        }
    }

    #[test]
    fn test_uniform_grid() {
        let grid = uniform_grid(Label::C);
        assert!(grid.rows().iter().flatten().all(|&label| label == Label::C));
    }
}

//! Domain model for the knight moves puzzle
//!
//! The puzzle is played on a fixed 6×6 grid whose cells carry one of three
//! labels. A [`WeightAssignment`] gives every label a positive integer weight,
//! and a [`Path`] is a sequence of knight moves scored against those weights.

mod grid;
mod label;
mod path;
mod position;
mod puzzle;
mod weights;


pub use grid::{Grid, GRID_SIZE};
pub use label::Label;
pub use path::Path;
pub use position::{Position, KNIGHT_OFFSETS};
pub use puzzle::{Puzzle, Route};
pub use weights::WeightAssignment;

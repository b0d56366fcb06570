//! Shared test fixtures for knight moves crates.
//!
//! This crate provides puzzle instances small enough to solve in a unit test,
//! alongside the published reference instance.
//!
//! - [`puzzles`] - Grids and puzzles with known outcomes
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! knight-moves-test = { workspace = true }
//! ```

pub mod puzzles;

pub use puzzles::{
    reference_grid_puzzle, short_routes, uniform_grid, uniform_puzzle,
};

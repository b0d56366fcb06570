//! Configuration system for the knight moves solver.
//!
//! Load a puzzle instance from TOML or YAML files to change the grid, the
//! routes, the target score or the weight ceiling without code changes.
//! Every field defaults to the published puzzle.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use knight_moves_config::PuzzleConfig;
//!
//! let config = PuzzleConfig::from_toml_str(r#"
//!     target_score = 100
//!     weight_ceiling = 20
//!
//!     [[routes]]
//!     start = "a6"
//!     end = "f1"
//!
//!     [[routes]]
//!     start = "a1"
//!     end = "f6"
//! "#).unwrap();
//!
//! let puzzle = config.build().unwrap();
//! assert_eq!(puzzle.target_score(), 100);
//! assert_eq!(puzzle.weight_ceiling(), 20);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use knight_moves_config::PuzzleConfig;
//!
//! let config = PuzzleConfig::load("knight-moves.toml").unwrap_or_default();
//! // Proceeds with the published puzzle if the file doesn't exist
//! ```

use std::path::Path;

use knight_moves_core::{Grid, KnightMovesError, Puzzle, Route, Score};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid puzzle: {0}")]
    Domain(#[from] KnightMovesError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns true if the error is a missing configuration file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Main puzzle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PuzzleConfig {
    /// Score each path must reach exactly.
    #[serde(default = "default_target_score")]
    pub target_score: Score,

    /// Maximum sum of the three weights.
    #[serde(default = "default_weight_ceiling")]
    pub weight_ceiling: u32,

    /// Grid rows, top row first, one label letter per cell.
    #[serde(default = "default_grid")]
    pub grid: Vec<String>,

    /// Routes that must both be completed.
    #[serde(default = "default_routes")]
    pub routes: Vec<RouteConfig>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            target_score: default_target_score(),
            weight_ceiling: default_weight_ceiling(),
            grid: default_grid(),
            routes: default_routes(),
        }
    }
}

impl PuzzleConfig {
    /// Creates a configuration describing the published puzzle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the target score.
    pub fn with_target_score(mut self, target_score: Score) -> Self {
        self.target_score = target_score;
        self
    }

    /// Sets the weight ceiling.
    pub fn with_weight_ceiling(mut self, weight_ceiling: u32) -> Self {
        self.weight_ceiling = weight_ceiling;
        self
    }

    /// Replaces the grid rows.
    pub fn with_grid<S: Into<String>>(mut self, rows: impl IntoIterator<Item = S>) -> Self {
        self.grid = rows.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the routes.
    pub fn with_routes(mut self, routes: impl IntoIterator<Item = RouteConfig>) -> Self {
        self.routes = routes.into_iter().collect();
        self
    }

    /// Validates the configuration and builds the puzzle it describes.
    ///
    /// # Errors
    ///
    /// Returns error if the grid is not 6×6 over the labels `A`, `B`, `C`,
    /// if there are not exactly two routes, if a route cell is not valid
    /// algebraic notation, or if the target score is not positive.
    pub fn build(&self) -> Result<Puzzle, ConfigError> {
        let grid = Grid::from_rows(&self.grid)?;

        let routes: Vec<Route> = self
            .routes
            .iter()
            .map(RouteConfig::to_route)
            .collect::<Result<_, _>>()?;
        let routes: [Route; 2] = routes.try_into().map_err(|routes: Vec<Route>| {
            ConfigError::Invalid(format!("expected 2 routes, found {}", routes.len()))
        })?;

        Ok(Puzzle::new(
            grid,
            routes,
            self.target_score,
            self.weight_ceiling,
        )?)
    }
}

impl From<&Puzzle> for PuzzleConfig {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            target_score: puzzle.target_score(),
            weight_ceiling: puzzle.weight_ceiling(),
            grid: puzzle.grid().to_rows(),
            routes: puzzle.routes().iter().map(RouteConfig::from).collect(),
        }
    }
}

/// A route given as two cells in algebraic notation, e.g. `a6` and `f1`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RouteConfig {
    pub start: String,
    pub end: String,
}

impl RouteConfig {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses both cells.
    pub fn to_route(&self) -> Result<Route, KnightMovesError> {
        Route::from_algebraic(&self.start, &self.end)
    }
}

impl From<&Route> for RouteConfig {
    fn from(route: &Route) -> Self {
        Self::new(route.start.to_algebraic(), route.end.to_algebraic())
    }
}

fn default_target_score() -> Score {
    Puzzle::REFERENCE_TARGET
}

fn default_weight_ceiling() -> u32 {
    Puzzle::REFERENCE_CEILING
}

fn default_grid() -> Vec<String> {
    Grid::reference().to_rows()
}

fn default_routes() -> Vec<RouteConfig> {
    Puzzle::reference_routes()
        .iter()
        .map(RouteConfig::from)
        .collect()
}

#[cfg(test)]
mod tests;

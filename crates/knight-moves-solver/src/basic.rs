//! Config-file driven entry point.
//!
//! This module provides `run_solver`, which loads `knight-moves.toml` from
//! the working directory when present and solves the puzzle it describes.
//!
//! Logging levels:
//! - **INFO**: Which puzzle source was used
//! - **WARN**: Config file present but unreadable

use std::path::Path;

use knight_moves_config::{ConfigError, PuzzleConfig};
use knight_moves_core::Puzzle;
use thiserror::Error;
use tracing::{info, warn};

use crate::solver::{KnightSolver, SolveReport};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "knight-moves.toml";

/// Failure to set up a solve.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid puzzle configuration in {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: ConfigError,
    },
}

/// Loads the puzzle described by the config file at `path`.
///
/// A missing file yields the published puzzle. A file that cannot be read
/// or parsed is reported and also yields the published puzzle. A file that
/// parses but describes an invalid puzzle is an error.
pub fn load_puzzle(path: impl AsRef<Path>) -> Result<Puzzle, SolveError> {
    let path = path.as_ref();

    let config = match PuzzleConfig::load(path) {
        Ok(config) => config,
        Err(e) if e.is_not_found() => {
            info!(event = "config", source = "reference");
            return Ok(Puzzle::reference());
        }
        Err(e) => {
            warn!(
                event = "config_unreadable",
                path = %path.display(),
                error = %e,
            );
            return Ok(Puzzle::reference());
        }
    };

    let puzzle = config.build().map_err(|source| SolveError::Config {
        path: path.display().to_string(),
        source,
    })?;
    info!(event = "config", source = %path.display());
    Ok(puzzle)
}

/// Solves the puzzle configured in [`CONFIG_FILE`], or the published
/// puzzle when there is none.
///
/// Returns the puzzle that was solved along with the report.
pub fn run_solver() -> Result<(Puzzle, SolveReport), SolveError> {
    let puzzle = load_puzzle(CONFIG_FILE)?;
    let report = KnightSolver::new(puzzle.clone()).solve();
    Ok((puzzle, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Config file in its own temporary directory, removed on drop.
    struct ScratchFile {
        dir: PathBuf,
        path: PathBuf,
    }

    impl ScratchFile {
        fn new(name: &str, contents: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "knight-moves-{}-{}",
                std::process::id(),
                name.trim_end_matches(".toml")
            ));
            std::fs::create_dir_all(&dir).unwrap();
            let path = dir.join(name);
            std::fs::write(&path, contents).unwrap();
            Self { dir, path }
        }
    }

    impl Drop for ScratchFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    #[test]
    fn test_missing_file_uses_reference() {
        let puzzle = load_puzzle("no-such-dir/knight-moves.toml").unwrap();
        assert_eq!(puzzle, Puzzle::reference());
    }

    #[test]
    fn test_malformed_file_uses_reference() {
        let file = ScratchFile::new("malformed.toml", "target_score = [");
        let puzzle = load_puzzle(&file.path).unwrap();
        assert_eq!(puzzle, Puzzle::reference());
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let file = ScratchFile::new("valid.toml", "target_score = 64\nweight_ceiling = 12\n");
        let puzzle = load_puzzle(&file.path).unwrap();
        assert_eq!(puzzle.target_score(), 64);
        assert_eq!(puzzle.weight_ceiling(), 12);
        assert_eq!(puzzle.routes(), &Puzzle::reference_routes());
    }

    #[test]
    fn test_invalid_puzzle_is_an_error() {
        let file = ScratchFile::new("invalid.toml", "target_score = -5\n");
        let err = load_puzzle(&file.path).unwrap_err();
        assert!(err.to_string().contains("invalid.toml"));
    }

    #[test]
    fn test_scratch_file_is_removed() {
        let file = ScratchFile::new("removed.toml", "");
        let dir = file.dir.clone();
        assert!(file.path.exists());
        drop(file);
        assert!(!dir.exists());
    }
}

//! Tests for puzzle configuration.

use super::*;
use knight_moves_core::{Label, Position};

#[test]
fn test_toml_parsing() {
    let toml = r#"
        target_score = 300
        weight_ceiling = 30
        grid = [
            "AAAAAA",
            "AAAAAA",
            "BBBBBB",
            "BBBBBB",
            "CCCCCC",
            "CCCCCC",
        ]

        [[routes]]
        start = "a6"
        end = "b4"

        [[routes]]
        start = "a1"
        end = "b3"
    "#;

    let config = PuzzleConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.target_score, 300);
    assert_eq!(config.weight_ceiling, 30);
    assert_eq!(config.routes.len(), 2);

    let puzzle = config.build().unwrap();
    assert_eq!(puzzle.grid().label_at(Position::new(4, 0)), Label::C);
    assert_eq!(puzzle.routes()[0].end, Position::new(2, 1));
    assert_eq!(puzzle.routes()[1].end, Position::new(3, 1));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        target_score: 120
        routes:
          - start: a6
            end: f1
          - start: a1
            end: f6
    "#;

    let config = PuzzleConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.target_score, 120);
    assert_eq!(config.weight_ceiling, Puzzle::REFERENCE_CEILING);

    let puzzle = config.build().unwrap();
    assert_eq!(puzzle.grid(), &Grid::reference());
    assert_eq!(puzzle.routes(), &Puzzle::reference_routes());
}

#[test]
fn test_empty_toml_is_reference_puzzle() {
    let config = PuzzleConfig::from_toml_str("").unwrap();
    assert_eq!(config, PuzzleConfig::default());
    assert_eq!(config.build().unwrap(), Puzzle::reference());
}

#[test]
fn test_builder() {
    let config = PuzzleConfig::new()
        .with_target_score(48)
        .with_weight_ceiling(12)
        .with_grid(["ABBCCC"; 6])
        .with_routes([RouteConfig::new("a6", "c5"), RouteConfig::new("f1", "d2")]);

    let puzzle = config.build().unwrap();
    assert_eq!(puzzle.target_score(), 48);
    assert_eq!(puzzle.weight_ceiling(), 12);
    assert_eq!(puzzle.grid().label_at(Position::new(5, 5)), Label::C);
    assert_eq!(puzzle.routes()[1].start, Position::new(5, 5));
}

#[test]
fn test_round_trip_through_puzzle() {
    let config = PuzzleConfig::from(&Puzzle::reference());
    assert_eq!(config, PuzzleConfig::default());
}

#[test]
fn test_rejects_bad_label() {
    let config = PuzzleConfig::new().with_grid(["ABBCCC", "ABBCCC", "AABBCC", "AABXCC", "AAABBC", "AAABBC"]);
    let err = config.build().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Domain(KnightMovesError::InvalidLabel {
            label: 'X',
            row: 3,
            column: 3
        })
    ));
}

#[test]
fn test_rejects_bad_shape() {
    let short_rows = PuzzleConfig::new().with_grid(["ABBCCC"; 5]);
    assert!(matches!(
        short_rows.build(),
        Err(ConfigError::Domain(KnightMovesError::GridShape(_)))
    ));

    let long_row = PuzzleConfig::new().with_grid(["ABBCCCA"; 6]);
    assert!(matches!(
        long_row.build(),
        Err(ConfigError::Domain(KnightMovesError::GridShape(_)))
    ));
}

#[test]
fn test_rejects_route_count() {
    let config = PuzzleConfig::new().with_routes([RouteConfig::new("a6", "f1")]);
    let err = config.build().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("found 1"));
}

#[test]
fn test_rejects_bad_notation() {
    let config = PuzzleConfig::new()
        .with_routes([RouteConfig::new("a6", "g1"), RouteConfig::new("a1", "f6")]);
    assert!(matches!(
        config.build(),
        Err(ConfigError::Domain(KnightMovesError::InvalidNotation(_)))
    ));
}

#[test]
fn test_rejects_non_positive_target() {
    let config = PuzzleConfig::new().with_target_score(0);
    assert!(matches!(
        config.build(),
        Err(ConfigError::Domain(KnightMovesError::InvalidTarget(0)))
    ));
}

#[test]
fn test_small_ceiling_is_valid() {
    let puzzle = PuzzleConfig::new().with_weight_ceiling(3).build().unwrap();
    assert_eq!(puzzle.weight_ceiling(), 3);
}

#[test]
fn test_missing_file_is_not_found() {
    let err = PuzzleConfig::load("does-not-exist/knight-moves.toml").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_malformed_toml() {
    let err = PuzzleConfig::from_toml_str("target_score = \"lots\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
    assert!(!err.is_not_found());
}

//! End-to-end solve of the published puzzle.

use knight_moves::{KnightSolver, Puzzle, WeightAssignment};

#[test]
#[ignore = "slow in debug builds; run with `cargo test --release -- --ignored`"]
fn test_reference_puzzle_solution_verifies() {
    let puzzle = Puzzle::reference();
    let report = KnightSolver::new(puzzle.clone()).solve();
    let solution = report.solution.expect("published puzzle has a solution");

    assert!(solution.weights.is_admissible(Puzzle::REFERENCE_CEILING));
    for (path, route) in solution.paths.iter().zip(puzzle.routes()) {
        assert_eq!(
            path.verify(
                puzzle.grid(),
                &solution.weights,
                route,
                Puzzle::REFERENCE_TARGET
            ),
            Ok(Puzzle::REFERENCE_TARGET)
        );
    }

    // Every earlier assignment was tried and rejected.
    let position = KnightSolver::new(puzzle)
        .candidates()
        .position(|w: WeightAssignment| w == solution.weights)
        .map(|i| i as u64 + 1);
    assert_eq!(position, Some(report.candidates));
}

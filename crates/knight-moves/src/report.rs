//! Plain-text rendering of a solve outcome.

use std::fmt::Write;
use std::time::Duration;

use knight_moves_core::Puzzle;
use knight_moves_solver::SolveReport;

/// Renders the program summary printed after solving.
///
/// On success, each route is followed on its own line by the path found for
/// it, in route order. Otherwise the summary ends with `No solution found`.
pub fn render_report(puzzle: &Puzzle, report: &SolveReport, elapsed: Duration) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Program duration: {:.3?}", elapsed);

    match &report.solution {
        Some(solution) => {
            let _ = writeln!(out, "Weights: {}", solution.weights);
            for (route, path) in puzzle.routes().iter().zip(&solution.paths) {
                let _ = writeln!(out, "Path {}:", route);
                let _ = writeln!(out, "{}", path);
            }
        }
        None => {
            let _ = writeln!(out, "No solution found");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_moves_solver::KnightSolver;
    use knight_moves_test::uniform_puzzle;

    #[test]
    fn test_render_solution() {
        let puzzle = uniform_puzzle(2, 10);
        let report = KnightSolver::new(puzzle.clone()).solve();
        let text = render_report(&puzzle, &report, Duration::from_millis(5));

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Program duration: "));
        assert_eq!(
            &lines[1..],
            &[
                "Weights: A=1, B=2, C=3",
                "Path a6 to b4:",
                "a6,b4",
                "Path a1 to b3:",
                "a1,b3",
            ]
        );
    }

    #[test]
    fn test_render_no_solution() {
        let puzzle = uniform_puzzle(3, 8);
        let report = KnightSolver::new(puzzle.clone()).solve();
        let text = render_report(&puzzle, &report, Duration::ZERO);

        assert!(!report.is_solved());
        assert_eq!(text.lines().last(), Some("No solution found"));
        assert!(!text.contains("Path "));
    }
}

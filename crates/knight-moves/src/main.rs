use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let start = Instant::now();

    match knight_moves::run_solver() {
        Ok((puzzle, report)) => {
            print!(
                "{}",
                knight_moves::render_report(&puzzle, &report, start.elapsed())
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

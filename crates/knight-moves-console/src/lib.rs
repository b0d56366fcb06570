//! Colorful console output for solver progress.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start/end and one progress line per weight assignment
//! - **DEBUG**: Outcome of each route search
//! - **WARN**: Configuration problems

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target prefix of the events rendered by [`KnightConsoleLayer`].
const SOLVER_TARGET: &str = "knight_moves_solver";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive("knight_moves_solver=info".parse().unwrap())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(KnightConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 _  __      _       _     _     __  __
| |/ /_ __ (_) __ _| |__ | |_  |  \/  | _____   _____  ___
| ' /| '_ \| |/ _` | '_ \| __| | |\/| |/ _ \ \ / / _ \/ __|
| . \| | | | | (_| | | | | |_  | |  | | (_) \ V /  __/\__ \
|_|\_\_| |_|_|\__, |_| |_|\__| |_|  |_|\___/ \_/ \___||___/
              |___/
"#;

    let version_line = format!(
        "                 v{} - Weighted Knight Path Solver\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct KnightConsoleLayer;

impl<S: Subscriber> Layer<S> for KnightConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with(SOLVER_TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    route: Option<String>,
    source: Option<String>,
    path: Option<String>,
    error: Option<String>,
    a: Option<u64>,
    b: Option<u64>,
    c: Option<u64>,
    nodes: Option<u64>,
    pruned: Option<u64>,
    depth: Option<u64>,
    candidates: Option<u64>,
    duration_us: Option<u64>,
    target_score: Option<i64>,
    weight_ceiling: Option<u64>,
    route_count: Option<u64>,
    found: Option<bool>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "route" => self.route = Some(value),
            "source" => self.source = Some(value),
            "path" => self.path = Some(value),
            "error" => self.error = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field, s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "a" => self.a = Some(value),
            "b" => self.b = Some(value),
            "c" => self.c = Some(value),
            "nodes" => self.nodes = Some(value),
            "pruned" => self.pruned = Some(value),
            "depth" => self.depth = Some(value),
            "candidates" => self.candidates = Some(value),
            "duration_us" => self.duration_us = Some(value),
            "weight_ceiling" => self.weight_ceiling = Some(value),
            "route_count" => self.route_count = Some(value),
            "target_score" => self.target_score = Some(value as i64),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "target_score" => self.target_score = Some(value),
            _ => self.record_u64(field, value as u64),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "found" {
            self.found = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "attempt" => format_attempt(v),
        "route" => format_route(v, level),
        "config" => format_config(v),
        "config_unreadable" => format_config_unreadable(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let target = v.target_score.unwrap_or(0);
    let ceiling = v.weight_ceiling.unwrap_or(0);
    let routes = v.route_count.unwrap_or(0);

    format!(
        "{} {} Solving │ target {} │ weight sum ≤ {} │ {} routes",
        format_elapsed(),
        "▶".bright_green().bold(),
        target.to_formatted_string(&Locale::en).bright_yellow(),
        ceiling.to_formatted_string(&Locale::en).bright_yellow(),
        routes.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_attempt(v: &EventVisitor) -> String {
    let found = v.found.unwrap_or(false);
    let icon = if found {
        "✓".bright_green().bold().to_string()
    } else {
        "·".bright_black().to_string()
    };

    format!(
        "{} {} Finding paths for {} │ took {} │ {} nodes",
        format_elapsed(),
        icon,
        format_weights(v).white().bold(),
        format_duration_us(v.duration_us.unwrap_or(0)).yellow(),
        v.nodes
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
    )
}

fn format_route(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG {
        return String::new();
    }

    let route = v.route.as_deref().unwrap_or("?");
    let status = if v.found.unwrap_or(false) {
        "found".bright_green().to_string()
    } else {
        "none".bright_red().to_string()
    };

    format!(
        "{}   {} {:<10} {} │ {} nodes │ {} pruned │ depth {}",
        format_elapsed(),
        "↳".bright_black(),
        route,
        status,
        v.nodes.unwrap_or(0).to_formatted_string(&Locale::en),
        v.pruned.unwrap_or(0).to_formatted_string(&Locale::en),
        v.depth.unwrap_or(0),
    )
    .bright_black()
    .to_string()
}

fn format_solve_end(v: &EventVisitor) -> String {
    let found = v.found.unwrap_or(false);
    let status = if found {
        "SOLVED".bright_green().bold().to_string()
    } else {
        "NO SOLUTION".bright_red().bold().to_string()
    };

    format!(
        "{} {} Solving complete │ {} │ {} candidates │ {} nodes │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status,
        v.candidates
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        v.nodes
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        format_duration_us(v.duration_us.unwrap_or(0)).yellow(),
    )
}

fn format_config(v: &EventVisitor) -> String {
    let source = v.source.as_deref().unwrap_or("reference");
    format!(
        "{} {} Puzzle from {}",
        format_elapsed(),
        "⚙".bright_blue(),
        source.white().bold()
    )
}

fn format_config_unreadable(v: &EventVisitor) -> String {
    format!(
        "{} {} Ignoring {}: {}",
        format_elapsed(),
        "!".bright_yellow().bold(),
        v.path.as_deref().unwrap_or("config").white().bold(),
        v.error.as_deref().unwrap_or("unreadable").yellow()
    )
}

fn format_weights(v: &EventVisitor) -> String {
    format!(
        "A={}, B={}, C={}",
        v.a.unwrap_or(0),
        v.b.unwrap_or(0),
        v.c.unwrap_or(0)
    )
}

/// Formats a duration given in microseconds.
pub fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else if us < 60_000_000 {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    } else {
        let mins = us / 60_000_000;
        let secs = (us % 60_000_000) / 1_000_000;
        format!("{}m {}s", mins, secs)
    }
}

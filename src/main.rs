//! Dutching Arb — Entry Point
//!
//! Solves one scenario and prints the evaluation as JSON on stdout.
//! Logs go to stderr so the output stays pipeable.
//!
//! Wiring sequence:
//! 1. Parse CLI arguments
//! 2. Load config.toml (defaults when the implicit path is absent)
//! 3. Init tracing (plain or JSON, `RUST_LOG` overrides the config level)
//! 4. Build the scenario source (file or stdin)
//! 5. Run the DutchingService and print the result

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dutching_arb::adapters::scenario::{FileScenarioSource, ReaderScenarioSource, ScenarioFormat};
use dutching_arb::config::{self, LoggingConfig};
use dutching_arb::ports::ScenarioSource;
use dutching_arb::usecases::DutchingService;

const DEFAULT_CONFIG: &str = "config.toml";

#[derive(Parser)]
#[command(name = "dutching-arb")]
#[command(author, version, about = "Dutching / arbitrage stake calculator", long_about = None)]
struct Cli {
    /// Scenario file (.toml or .json), or `-` to read JSON from stdin
    #[arg(short, long)]
    scenario: PathBuf,

    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rounding increment for solved stakes (overrides config and scenario)
    #[arg(short, long)]
    rounding_step: Option<Decimal>,

    /// Solve degenerate inputs instead of rejecting them
    #[arg(long)]
    lenient: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // ── 1. CLI ──────────────────────────────────────────────
    let cli = Cli::parse();

    // ── 2. Configuration ────────────────────────────────────
    let mut app_config = match &cli.config {
        Some(path) => config::loader::load_config(path)
            .context("Failed to load configuration")?,
        None => config::loader::load_config_or_default(DEFAULT_CONFIG)
            .context("Failed to load configuration")?,
    };
    if cli.lenient {
        app_config.solver.strict = false;
    }

    // ── 3. Logging ──────────────────────────────────────────
    init_tracing(&app_config.logging);

    info!(
        name = %app_config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        strict = app_config.solver.strict,
        "Starting dutching calculator"
    );

    // ── 4. Scenario source ──────────────────────────────────
    let source = build_source(&cli.scenario)?;

    // ── 5. Evaluate ─────────────────────────────────────────
    let service = DutchingService::new(app_config.solver.clone())
        .with_rounding_override(cli.rounding_step);
    let evaluation = service.evaluate(source.as_ref())?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&evaluation)
    } else {
        serde_json::to_string(&evaluation)
    }
    .context("Failed to serialize evaluation")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write output")?;

    Ok(())
}

/// Initialize the global tracing subscriber on stderr.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Stdin for `-`, otherwise a file whose extension picks the format.
fn build_source(path: &Path) -> Result<Box<dyn ScenarioSource>> {
    if path.as_os_str() == "-" {
        let source =
            ReaderScenarioSource::from_reader(io::stdin().lock(), ScenarioFormat::Json, "stdin")?;
        Ok(Box::new(source))
    } else {
        Ok(Box::new(FileScenarioSource::new(path)?))
    }
}


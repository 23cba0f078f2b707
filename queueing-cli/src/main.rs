//! Queueing CLI - steady-state analysis of a single queue.
//!
//! ## Usage
//!
//! ```bash
//! # M/M/1 with 0.8 arrivals and 1 service per unit time
//! queueing -a 0.8 -s 1
//!
//! # Two-server M/M/c as JSON
//! queueing -m MMC -c 2 -a 0.95 -s 1 --json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` or `QUEUEING_LOG`.

use anyhow::{bail, Context};
use clap::Parser;
use queueing_core::{use_model, Model, Problem, MD1, MM1, MMC};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod report;

use config::ReportConfig;

#[derive(Parser)]
#[command(name = "queueing")]
#[command(version)]
#[command(about = "Steady-state analysis of M/D/1, M/M/1 and M/M/c queues", long_about = None)]
struct Cli {
    /// Queueing model: MM1, MMC or MD1 (or M/M/1, M/M/c, M/D/1)
    #[arg(short, long, default_value = "MM1")]
    model: String,

    /// Number of servers
    #[arg(short = 'c', long, default_value_t = 1, allow_negative_numbers = true)]
    servers: i64,

    /// Mean arrivals per unit time
    #[arg(short, long, allow_negative_numbers = true)]
    arrival: f64,

    /// Mean completions per unit time per server
    #[arg(short, long, allow_negative_numbers = true)]
    service: f64,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Decimals in the text report (default 3, or QUEUEING_PRECISION)
    #[arg(long)]
    precision: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ReportConfig::from_env().with_precision(cli.precision);

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let model = resolve_model(&cli.model)?;
    let problem = validate_problem(cli.servers, cli.arrival, cli.service)?;

    debug!(
        model = model.name(),
        servers = problem.servers,
        arrival_rate = problem.arrival_rate,
        service_rate = problem.service_rate,
        "Analysing queue"
    );

    let analysis = model.analyse(&problem)?;

    if cli.json {
        let json = report::render_json(&analysis).context("Failed to serialize analysis")?;
        println!("{}", json);
    } else {
        print!("{}", report::render_table(model, &problem, &analysis, config.precision));
    }

    Ok(())
}

/// Map a command-line model name onto a registered model
///
/// The short forms `MM1`, `MMC` and `MD1` are accepted alongside the Kendall
/// names understood by the core registry.
fn resolve_model(name: &str) -> queueing_core::Result<Model> {
    let canonical = match name {
        "MM1" => MM1,
        "MMC" => MMC,
        "MD1" => MD1,
        other => other,
    };
    use_model(canonical)
}

/// Check the raw arguments and build the problem to analyse
fn validate_problem(servers: i64, arrival: f64, service: f64) -> anyhow::Result<Problem> {
    if servers < 1 {
        bail!("number of servers must be one or more");
    }
    let servers = u32::try_from(servers).context("number of servers is too large")?;
    if !arrival.is_finite() || arrival < 0.0 {
        bail!("arrival rate must be a finite, non-negative number");
    }
    if !service.is_finite() || service <= 0.0 {
        bail!("service rate must be a finite, positive number");
    }
    Ok(Problem::new(servers, arrival, service))
}

// =============================================================================
// meanrev — Bollinger-Band mean-reversion scanner
// =============================================================================
//
// Fetch daily closes for a ticker symbol, compute the Bollinger indicator
// table with buy/sell signals, print the signal table and return summary,
// and export the table as CSV.
// =============================================================================

mod indicators;
mod provider;
mod report;
mod series;
mod strategy;
mod types;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::provider::YahooClient;
use crate::types::StrategyParams;

#[derive(Parser, Debug)]
#[command(name = "meanrev")]
#[command(about = "Bollinger-Band mean-reversion scanner for daily stock prices")]
struct Args {
    /// Ticker symbol (e.g. AAPL)
    #[arg(short, long, default_value = "AAPL")]
    symbol: String,

    /// Number of trading days to fetch (10-1000)
    #[arg(short, long, default_value_t = 252)]
    days: u32,

    /// Moving-average window (5-100)
    #[arg(short, long, default_value_t = 20)]
    window: usize,

    /// Bollinger band standard-deviation factor (1.0-3.0)
    #[arg(short = 'k', long, default_value_t = 2.0)]
    std_factor: f64,

    /// Directory the CSV export is written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Single error surface: any failure below is reported, never a panic.
    if let Err(e) = run(args).await {
        error!(error = %e, "run failed");
        eprintln!("Error fetching stock data: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let params = StrategyParams {
        symbol: args.symbol.trim().to_uppercase(),
        days: args.days,
        window: args.window,
        std_factor: args.std_factor,
    };
    params.validate()?;

    info!(
        symbol = %params.symbol,
        days = params.days,
        window = params.window,
        std_factor = params.std_factor,
        "fetching daily closes"
    );

    let client = YahooClient::new()?;
    let series = client
        .fetch_daily_closes(&params.symbol, params.days)
        .await?;
    info!(points = series.len(), "price series fetched");

    let report = strategy::evaluate(&series, &params);
    if report.rows.is_empty() {
        bail!(
            "not enough history for a {}-day window ({} prices fetched)",
            params.window,
            series.len()
        );
    }

    report::print_signal_table(&report.rows);
    if let Some(summary) = &report.summary {
        report::print_summary(&params.symbol, summary);
    }

    let path = report::export_csv(&report.rows, &params.symbol, &args.out_dir)?;
    info!(path = %path.display(), rows = report.rows.len(), "indicator table exported");

    Ok(())
}

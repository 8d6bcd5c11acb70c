//! One-shot price lookup.
//!
//! Prints the normalized rows and saves the report as JSON in the
//! current directory.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use mandi_prices::report::save_report;
use mandi_prices::scrapers::{NapantaScraper, PriceQuery, PriceSource};
use mandi_prices::{logging, Config};
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fetch_prices")]
#[command(about = "Look up mandi prices for a commodity and save them as JSON")]
struct Args {
    /// State, e.g. punjab
    state: String,

    /// Commodity, e.g. wheat
    commodity: String,

    /// Market name; omit for statewide prices
    mandi: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init();

    let query = PriceQuery::new(&args.state, &args.commodity, args.mandi.as_deref());
    let lookup = query.validate()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    let scraper = NapantaScraper::new(&config.scraper)?;

    info!("Looking up prices on {}", scraper.source_name());
    let report = scraper.fetch(&lookup).await?;

    info!(
        "✅ {} price rows for {} in {}",
        report.prices.len(),
        report.commodity,
        report.state
    );

    for (i, record) in report.prices.iter().enumerate() {
        println!(
            "{:>3}. {:<12} {:<24} {}",
            i + 1,
            record.date.as_deref().unwrap_or("-"),
            record.mandi.as_deref().unwrap_or("-"),
            record.avg.as_deref().unwrap_or("-")
        );
    }

    let path = save_report(&report, Path::new("."), Local::now().date_naive()).await?;
    info!("💾 Saved report to {}", path.display());

    Ok(())
}

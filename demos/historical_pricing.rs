// demos/historical_pricing.rs

//! Price an option with volatility estimated from a daily price file.
//!
//! Usage:
//!     cargo run --example historical_pricing -- <csv_path> <strike> <days_to_expiry|YYYY-MM-DD> [call|put] [rate%]
//!
//! The CSV needs `Date` and `Close` columns (case-insensitive first letter,
//! other columns ignored). Spot is the last close in the file. An expiry
//! given as a date is measured from the last date in the file.

use std::env;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use bs_pricer::{
    inputs_from_history, price, EngineConfig, HistoricalSeries, OptionKind,
};

/// Rate used when none is given on the command line. The pricing library
/// never assumes a rate; this demo does, and says so in its output.
const REFERENCE_RISK_FREE_RATE: f64 = 0.025;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <csv_path> <strike> <days_to_expiry|YYYY-MM-DD> [call|put] [rate%]\nExample: {} tests/data/daily_closes.csv 190 30 call",
            args[0], args[0]
        );
        std::process::exit(1);
    }

    let series = HistoricalSeries::from_csv_path(&args[1])?;
    let strike: f64 = args[2].parse().context("Strike must be a number")?;
    let kind: OptionKind = args
        .get(4)
        .map(|s| s.parse::<OptionKind>()).transpose()?.unwrap_or(OptionKind::Call);
    let (rate, rate_source) = match args.get(5) {
        Some(raw) => (
            raw.parse::<f64>().context("Rate must be a number")? / 100.0,
            "command line",
        ),
        None => (REFERENCE_RISK_FREE_RATE, "REFERENCE_RISK_FREE_RATE"),
    };

    let config = EngineConfig::equity();
    let spot = series
        .last_close()
        .ok_or_else(|| anyhow!("Price file {} has no rows", args[1]))?;

    let t = match NaiveDate::parse_from_str(&args[3], "%Y-%m-%d") {
        Ok(expiry) => {
            let valuation = *series
                .dates()
                .last()
                .ok_or_else(|| anyhow!("Price file {} carries no dates", args[1]))?;
            config.years_to_expiry(valuation, expiry)?
        }
        Err(_) => {
            let days: f64 = args[3]
                .parse()
                .context("Expiry must be a day count or a YYYY-MM-DD date")?;
            if days <= 0.0 {
                return Err(anyhow!("Expiry must be in the future, got {} days", days));
            }
            config.years_from_days(days)
        }
    };
    let days = t * config.days_per_year;

    println!("Loaded {} closes from {}", series.len(), args[1]);
    if let (Some(first), Some(last)) = (series.dates().first(), series.dates().last()) {
        println!("  Range: {} to {}", first, last);
    }

    let inputs = inputs_from_history(spot, strike, t, rate, &series, &config)?;
    let premium = price(&inputs, kind)?;

    println!("\n{} option price: ${:.2}", kind, premium);
    println!("  Underlying price (S): ${:.2} (last close)", spot);
    println!("  Strike price (K):     ${:.2}", strike);
    println!("  Time to expiry (T):   {:.0} days", days);
    println!("  Risk-free rate (r):   {:.2}% ({})", rate * 100.0, rate_source);
    println!(
        "  Volatility (sigma):   {:.2}% (historical, {} days/yr)",
        inputs.volatility * 100.0,
        config.trading_days_per_year
    );

    Ok(())
}

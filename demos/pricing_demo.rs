// demos/pricing_demo.rs

//! Manual-entry Black-Scholes pricing
//!
//! This example shows how to:
//! 1. Build inputs from screen quotes (days to expiry, rate and vol in percent)
//! 2. Price a call and a put
//! 3. Check put-call parity
//! 4. Sweep the premium across strikes
//!
//! Usage:
//!     cargo run --example pricing_demo -- [spot] [strike] [days] [rate%] [vol%] [call|put]

use std::env;

use anyhow::{Context, Result};
use bs_pricer::{
    default_configs, parity_residual, price, strike_curve, OptionKind, PricingInputs,
};

fn arg_or(args: &[String], idx: usize, default: f64) -> Result<f64> {
    match args.get(idx) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Argument {} is not a number: {}", idx, raw)),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let spot = arg_or(&args, 1, 150.0)?;
    let strike = arg_or(&args, 2, 155.0)?;
    let days = arg_or(&args, 3, 30.0)?;
    let rate_pct = arg_or(&args, 4, 2.5)?;
    let vol_pct = arg_or(&args, 5, 25.0)?;
    let kind: OptionKind = match args.get(6) {
        Some(raw) => raw.parse()?,
        None => OptionKind::Call,
    };

    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let config = default_configs::equity();
    let inputs =
        PricingInputs::from_quotes(spot, strike, days, rate_pct, vol_pct, config.days_per_year)?;

    let premium = price(&inputs, kind)?;
    println!("\n{} option price: ${:.2}", kind, premium);
    println!("  Underlying price (S): ${:.2}", inputs.spot_price);
    println!("  Strike price (K):     ${:.2}", inputs.strike_price);
    println!("  Time to expiry (T):   {} days", days);
    println!("  Risk-free rate (r):   {:.2}%", inputs.risk_free_rate * 100.0);
    println!("  Volatility (sigma):   {:.2}%", inputs.volatility * 100.0);

    println!(
        "\nPut-call parity residual: {:.3e}",
        parity_residual(&inputs)?
    );

    let curve = strike_curve(&inputs, &config.strike_sweep)?;
    println!("\nPrice vs strike ({} points, every 7th shown):", curve.points.len());
    println!("{:<10} {:<12} {:<12}", "Strike", "Call", "Put");
    println!("{}", "-".repeat(34));
    for point in curve.points.iter().step_by(7) {
        println!("{:<10.2} {:<12.4} {:<12.4}", point.x, point.call, point.put);
    }

    Ok(())
}

// Example: plot_price_curves.rs
// Prices one option and writes two SVG charts: premium vs strike and premium
// vs days to expiry, each with the priced option marked.
//
// Usage:
//     cargo run --example plot_price_curves -- [spot] [strike] [days] [rate%] [vol%] [call|put]
//
// Output: price_vs_strike.svg and price_vs_expiry.svg in the working directory.

use std::env;
use std::error::Error;

use bs_pricer::{price, price_curves, EngineConfig, OptionKind, PriceCurve, PricingInputs};
use plotters::prelude::*;

fn arg_or(args: &[String], idx: usize, default: f64) -> Result<f64, Box<dyn Error>> {
    Ok(match args.get(idx) {
        Some(raw) => raw.parse()?,
        None => default,
    })
}

fn plot_curve(
    path: &str,
    title: &str,
    x_desc: &str,
    curve: &PriceCurve,
    x_scale: f64,
    marker: (f64, f64),
) -> Result<(), Box<dyn Error>> {
    let xs: Vec<f64> = curve.xs().iter().map(|x| x * x_scale).collect();
    let (x_min, x_max) = match (xs.first(), xs.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => return Err("Empty curve".into()),
    };
    let (_, y_hi) = curve.price_range().ok_or("Empty curve")?;
    let y_max = y_hi.max(marker.1) * 1.05;

    let root = SVGBackend::new(path, (1024, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 26))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("Option Price ($)")
        .draw()?;

    let calls: Vec<(f64, f64)> = xs.iter().copied().zip(curve.calls()).collect();
    let puts: Vec<(f64, f64)> = xs.iter().copied().zip(curve.puts()).collect();

    chart
        .draw_series(vec![PathElement::new(calls, BLUE.stroke_width(2))])?
        .label("Call Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(vec![PathElement::new(puts, GREEN.stroke_width(2))])?
        .label("Put Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));
    chart
        .draw_series(std::iter::once(Circle::new(marker, 5, RED.filled())))?
        .label("Current Option")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    println!("Chart saved to {}", path);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
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

    let config = EngineConfig::default();
    let inputs =
        PricingInputs::from_quotes(spot, strike, days, rate_pct, vol_pct, config.days_per_year)?;
    let premium = price(&inputs, kind)?;
    println!("{} option price: ${:.2}", kind, premium);

    let (by_strike, by_maturity) = price_curves(&inputs, &config)?;

    plot_curve(
        "price_vs_strike.svg",
        "Option Price vs Strike Price",
        "Strike Price ($)",
        &by_strike,
        1.0,
        (strike, premium),
    )?;
    plot_curve(
        "price_vs_expiry.svg",
        "Option Price vs Time to Expiry",
        "Days to Expiry",
        &by_maturity,
        config.days_per_year,
        (days, premium),
    )?;

    Ok(())
}

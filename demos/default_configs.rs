use bs_pricer::{default_configs, inputs_from_history, price, HistoricalSeries, OptionKind};

fn main() -> anyhow::Result<()> {
    // A short run of closes, enough for a sample deviation
    let series = HistoricalSeries::from_closes(vec![
        100.0, 101.5, 100.8, 102.2, 103.0, 101.9, 102.7, 104.1, 103.6, 105.0,
    ]);

    println!("bs-pricer Default Configuration Examples\n");

    for (name, config) in [
        ("Equity", default_configs::equity()),
        ("Crypto", default_configs::crypto()),
    ] {
        println!("{} configuration:", name);
        println!("   Trading days per year: {}", config.trading_days_per_year);
        println!("   Maturity day count:    {}", config.days_per_year);
        println!("   Return transform:      {:?}", config.return_kind);

        let t = config.years_from_days(30.0);
        let inputs = inputs_from_history(105.0, 105.0, t, 0.03, &series, &config)?;
        println!("   Historical volatility: {:.2}%", inputs.volatility * 100.0);
        println!(
            "   30d ATM call / put:    {:.4} / {:.4}",
            price(&inputs, OptionKind::Call)?,
            price(&inputs, OptionKind::Put)?
        );
        println!("   As TOML:\n{}", config.to_toml_string()?);
    }

    Ok(())
}

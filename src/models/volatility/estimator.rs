use statrs::statistics::Statistics;
use tracing::debug;

use super::types::{HistoricalSeries, ReturnKind};
use crate::error::{PricingError, PricingResult};

/// Trading sessions per year for exchange-listed equities.
pub const DEFAULT_TRADING_DAYS_PER_YEAR: u32 = 252;

/// Period-over-period returns of the series.
///
/// Every close must be positive and finite; a zero close would divide by
/// zero in the following return.
pub fn returns(series: &HistoricalSeries, kind: ReturnKind) -> PricingResult<Vec<f64>> {
    let closes = series.closes();
    if closes.len() < 2 {
        return Err(PricingError::insufficient_data(2, closes.len()));
    }

    if let Some((idx, &p)) = closes
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p <= 0.0)
    {
        return Err(PricingError::invalid_input(format!(
            "Price at index {} must be positive and finite, got: {}",
            idx, p
        )));
    }

    let out = closes
        .windows(2)
        .map(|w| match kind {
            ReturnKind::Simple => (w[1] - w[0]) / w[0],
            ReturnKind::Log => (w[1] / w[0]).ln(),
        })
        .collect();
    Ok(out)
}

/// Annualized volatility from simple returns.
///
/// Sample standard deviation (n - 1 denominator) of the returns, scaled by
/// `sqrt(trading_days_per_year)`. A constant series yields exactly `0.0`,
/// which [`crate::price`] will then reject.
///
/// # Errors
///
/// * [`PricingError::InsufficientData`] with fewer than three closes (two
///   returns are the minimum for a sample deviation)
/// * [`PricingError::InvalidInput`] for a zero, negative or non-finite close,
///   or a zero `trading_days_per_year`
pub fn annualized_volatility(
    series: &HistoricalSeries,
    trading_days_per_year: u32,
) -> PricingResult<f64> {
    annualized_volatility_with(series, trading_days_per_year, ReturnKind::Simple)
}

/// [`annualized_volatility`] with an explicit choice of return transform.
pub fn annualized_volatility_with(
    series: &HistoricalSeries,
    trading_days_per_year: u32,
    kind: ReturnKind,
) -> PricingResult<f64> {
    if trading_days_per_year == 0 {
        return Err(PricingError::invalid_input(
            "trading_days_per_year must be positive",
        ));
    }

    let rets = returns(series, kind)?;
    if rets.len() < 2 {
        return Err(PricingError::insufficient_data(3, series.len()));
    }

    let daily = rets.iter().std_dev();
    let sigma = daily * f64::from(trading_days_per_year).sqrt();

    debug!(
        observations = series.len(),
        ?kind,
        daily_std = daily,
        sigma,
        "estimated historical volatility"
    );
    Ok(sigma)
}

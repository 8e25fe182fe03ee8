//! # bs-pricer: Black-Scholes European Option Pricing
//!
//! `bs-pricer` prices European calls and puts on a non-dividend-paying
//! underlying with the Black-Scholes closed form, and estimates the
//! volatility input from a series of historical closing prices.
//!
//! ## Core Features
//!
//! - **Pricing Formula**: closed-form call/put premia with a shared d1/d2
//!   helper and an erfc-based normal CDF
//! - **Volatility Estimator**: annualized sample deviation of simple (or log)
//!   returns
//! - **Sensitivity Sweeps**: premia across a grid of strikes or maturities
//! - **Typed Errors**: invalid inputs are rejected before any arithmetic, so
//!   no NaN or infinity is ever returned
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricer::{price, price_from_history, EngineConfig, HistoricalSeries, OptionKind, PricingInputs};
//!
//! // Direct inputs: S, K, T (years), r, sigma
//! let inputs = PricingInputs::new(100.0, 90.0, 30.0 / 365.0, 0.01, 0.30)?;
//! let call = price(&inputs, OptionKind::Call)?;
//! assert!(call > 10.0);
//!
//! // Volatility from history
//! let series = HistoricalSeries::from_closes(vec![100.0, 102.0, 101.0, 105.0, 104.0]);
//! let put = price_from_history(104.0, 100.0, 0.5, 0.01, &series, OptionKind::Put, &EngineConfig::equity())?;
//! assert!(put > 0.0);
//! # Ok::<(), bs_pricer::PricingError>(())
//! ```
//!
//! ## Configuration Presets
//!
//! - `equity()`: 252 trading days, simple returns
//! - `crypto()`: 365 trading days, log returns

// ================================================================================================
// MODULES
// ================================================================================================

pub mod engine;
pub mod error;
pub mod models;

// ================================================================================================
// IMPORTS
// ================================================================================================

use tracing::debug;

use models::volatility::annualized_volatility_with;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, PricingResult};

// Pricing formula
pub use models::bs::{
    call_price, d1_d2, intrinsic_value, parity_residual, price, put_price, OptionKind,
    PriceResult, PricingInputs,
};

// Volatility estimation
pub use models::volatility::{
    annualized_volatility, returns, HistoricalSeries, ReturnKind, DEFAULT_TRADING_DAYS_PER_YEAR,
};

// Configuration and sweeps
pub use engine::{
    config::{EngineConfig, MaturitySweep, StrikeSweep},
    sweep::{maturity_curve, strike_curve, sweep},
    types::{CurvePoint, PriceCurve, SweepAxis},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured market conventions.
///
/// - [`equity()`]: exchange-listed stocks
/// - [`crypto()`]: markets that trade every calendar day
pub mod default_configs {
    use crate::engine::config::EngineConfig;

    /// 252 sessions per year, simple returns, 365-day maturity basis.
    ///
    /// ```rust
    /// let config = bs_pricer::default_configs::equity();
    /// assert_eq!(config.trading_days_per_year, 252);
    /// ```
    pub fn equity() -> EngineConfig {
        EngineConfig::equity()
    }

    /// 365 sessions per year, log returns, 365-day maturity basis.
    pub fn crypto() -> EngineConfig {
        EngineConfig::crypto()
    }
}

/// Estimate volatility from `series` under `config`, then price.
///
/// This is the "historical" input path: spot, strike, maturity and rate come
/// from the caller, sigma comes from the series. Spot is never inferred; pass
/// [`HistoricalSeries::last_close`] explicitly if that is the intended spot.
///
/// # Errors
///
/// Any error of [`annualized_volatility`] (too few points, zero prices) or of
/// [`price`] (including a zero volatility estimate from a flat series).
pub fn price_from_history(
    spot_price: f64,
    strike_price: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    series: &HistoricalSeries,
    kind: OptionKind,
    config: &EngineConfig,
) -> PricingResult<PriceResult> {
    let inputs = inputs_from_history(
        spot_price,
        strike_price,
        time_to_maturity,
        risk_free_rate,
        series,
        config,
    )?;
    price(&inputs, kind)
}

/// Validated [`PricingInputs`] with volatility taken from `series`.
pub fn inputs_from_history(
    spot_price: f64,
    strike_price: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    series: &HistoricalSeries,
    config: &EngineConfig,
) -> PricingResult<PricingInputs> {
    let sigma =
        annualized_volatility_with(series, config.trading_days_per_year, config.return_kind)?;
    debug!(sigma, observations = series.len(), "volatility from history");
    PricingInputs::new(
        spot_price,
        strike_price,
        time_to_maturity,
        risk_free_rate,
        sigma,
    )
}

/// Strike and maturity curves for `inputs` using the grids in `config`.
pub fn price_curves(
    inputs: &PricingInputs,
    config: &EngineConfig,
) -> PricingResult<(PriceCurve, PriceCurve)> {
    config.validate()?;
    let strikes = strike_curve(inputs, &config.strike_sweep)?;
    let maturities = maturity_curve(inputs, &config.maturity_sweep, config.days_per_year)?;
    Ok((strikes, maturities))
}

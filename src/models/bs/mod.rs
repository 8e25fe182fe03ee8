// Closed-form Black-Scholes pricing of European calls and puts on a
// non-dividend-paying underlying. Implied volatility and Greeks are out of
// scope; inputs are validated up front so that no NaN or infinity escapes.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{PricingError, PricingResult};
use crate::models::utils::{norm_cdf, require_positive};

/// Option premium, in the currency unit of spot and strike.
pub type PriceResult = f64;

/// Exercise right of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            other => Err(PricingError::invalid_input(format!(
                "Invalid option type: {}",
                other
            ))),
        }
    }
}

/// The five scalar inputs of the Black-Scholes formula.
///
/// Construct through [`PricingInputs::new`] to get validation at the boundary;
/// the fields stay public so callers can build sweeps by varying one of them,
/// and [`price`] re-validates whatever it is handed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Current price of the underlying (S)
    pub spot_price: f64,
    /// Strike price (K)
    pub strike_price: f64,
    /// Remaining life of the option in years (T)
    pub time_to_maturity: f64,
    /// Continuously-compounded risk-free rate as a decimal (r). May be negative.
    pub risk_free_rate: f64,
    /// Annualized volatility as a decimal (sigma)
    pub volatility: f64,
}

impl PricingInputs {
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> PricingResult<Self> {
        let inputs = Self {
            spot_price,
            strike_price,
            time_to_maturity,
            risk_free_rate,
            volatility,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Build inputs from the way they are usually quoted on a screen: maturity
    /// in calendar days, rate and volatility in percent.
    ///
    /// `days_per_year` is the day-count basis used to turn days into years
    /// (365.0 for the calendar convention).
    pub fn from_quotes(
        spot_price: f64,
        strike_price: f64,
        days_to_expiry: f64,
        rate_percent: f64,
        volatility_percent: f64,
        days_per_year: f64,
    ) -> PricingResult<Self> {
        require_positive("days_per_year", days_per_year)?;
        Self::new(
            spot_price,
            strike_price,
            days_to_expiry / days_per_year,
            rate_percent / 100.0,
            volatility_percent / 100.0,
        )
    }

    /// Check every precondition of the closed form.
    pub fn validate(&self) -> PricingResult<()> {
        require_positive("spot_price", self.spot_price)?;
        require_positive("strike_price", self.strike_price)?;
        require_positive("time_to_maturity", self.time_to_maturity)?;
        require_positive("volatility", self.volatility)?;
        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::invalid_input(format!(
                "risk_free_rate must be finite, got: {}",
                self.risk_free_rate
            )));
        }
        Ok(())
    }

    pub fn with_spot(self, spot_price: f64) -> Self {
        Self { spot_price, ..self }
    }

    pub fn with_strike(self, strike_price: f64) -> Self {
        Self {
            strike_price,
            ..self
        }
    }

    pub fn with_maturity(self, time_to_maturity: f64) -> Self {
        Self {
            time_to_maturity,
            ..self
        }
    }

    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }
}

/// The `d1` and `d2` terms shared by the call and put legs.
///
/// Assumes validated inputs.
pub fn d1_d2(inputs: &PricingInputs) -> (f64, f64) {
    let s = inputs.spot_price;
    let k = inputs.strike_price;
    let t = inputs.time_to_maturity;
    let r = inputs.risk_free_rate;
    let sigma = inputs.volatility;

    // Expanded so that no sigma^2 term can overflow for very large volatility
    let sqrt_t = t.sqrt();
    let vol_sqrt_t = sigma * sqrt_t;
    let d1 = (s / k).ln() / vol_sqrt_t + r * sqrt_t / sigma + 0.5 * vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Price a European option with the Black-Scholes closed form.
///
/// ```text
/// call = S·Φ(d1) − K·e^(−rT)·Φ(d2)
/// put  = K·e^(−rT)·Φ(−d2) − S·Φ(−d1)
/// ```
///
/// # Errors
///
/// [`PricingError::InvalidInput`] if spot, strike, maturity or volatility is
/// not strictly positive, if any field is non-finite, or if the inputs are so
/// extreme that the premium itself overflows.
///
/// # Example
///
/// ```rust
/// use bs_pricer::{price, OptionKind, PricingInputs};
///
/// let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2)?;
/// let call = price(&inputs, OptionKind::Call)?;
/// assert!((call - 10.4506).abs() < 1e-4);
/// # Ok::<(), bs_pricer::PricingError>(())
/// ```
pub fn price(inputs: &PricingInputs, kind: OptionKind) -> PricingResult<PriceResult> {
    inputs.validate()?;

    let (d1, d2) = d1_d2(inputs);
    if d1.is_nan() || d2.is_nan() {
        return Err(PricingError::invalid_input(format!(
            "Undefined d1/d2 for inputs {:?}",
            inputs
        )));
    }
    let s = inputs.spot_price;
    let discounted_strike = inputs.strike_price * inputs.discount_factor();

    let premium = match kind {
        OptionKind::Call => s * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionKind::Put => discounted_strike * norm_cdf(-d2) - s * norm_cdf(-d1),
    };

    if !premium.is_finite() {
        return Err(PricingError::invalid_input(format!(
            "Non-finite {} premium for inputs {:?}",
            kind, inputs
        )));
    }

    // Rounding can leave a deep out-of-the-money premium a few ulps below zero
    let premium = premium.max(0.0);
    trace!(%kind, d1, d2, premium, "black-scholes price");
    Ok(premium)
}

pub fn call_price(inputs: &PricingInputs) -> PricingResult<PriceResult> {
    price(inputs, OptionKind::Call)
}

pub fn put_price(inputs: &PricingInputs) -> PricingResult<PriceResult> {
    price(inputs, OptionKind::Put)
}

/// `call − put − (S − K·e^(−rT))`, zero up to floating-point error.
pub fn parity_residual(inputs: &PricingInputs) -> PricingResult<f64> {
    let call = call_price(inputs)?;
    let put = put_price(inputs)?;
    let forward_value = inputs.spot_price - inputs.strike_price * inputs.discount_factor();
    Ok(call - put - forward_value)
}

/// Payoff at expiry: `max(S − K, 0)` for a call, `max(K − S, 0)` for a put.
///
/// [`price`] never falls back to this for expired options; a caller that
/// wants intrinsic value at `T = 0` asks for it explicitly.
pub fn intrinsic_value(spot_price: f64, strike_price: f64, kind: OptionKind) -> f64 {
    match kind {
        OptionKind::Call => (spot_price - strike_price).max(0.0),
        OptionKind::Put => (strike_price - spot_price).max(0.0),
    }
}

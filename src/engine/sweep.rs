//! Sensitivity sweeps: the same closed form evaluated over a grid of one
//! input while the others stay fixed.

use tracing::{debug, warn};

use super::config::{MaturitySweep, StrikeSweep};
use super::types::{CurvePoint, PriceCurve, SweepAxis};
use crate::error::{PricingError, PricingResult};
use crate::models::bs::{call_price, put_price, PricingInputs};
use crate::models::utils::linspace;

/// Price calls and puts at every grid value of `axis`.
///
/// The first invalid grid point aborts the sweep with its error.
pub fn sweep(base: &PricingInputs, axis: SweepAxis, grid: &[f64]) -> PricingResult<PriceCurve> {
    if grid.is_empty() {
        warn!(?axis, "sweep requested over an empty grid");
        return Err(PricingError::invalid_input("Sweep grid must not be empty"));
    }

    let points = grid
        .iter()
        .map(|&x| -> PricingResult<CurvePoint> {
            let inputs = match axis {
                SweepAxis::Strike => base.with_strike(x),
                SweepAxis::Maturity => base.with_maturity(x),
            };
            Ok(CurvePoint {
                x,
                call: call_price(&inputs)?,
                put: put_price(&inputs)?,
            })
        })
        .collect::<PricingResult<Vec<_>>>()?;

    debug!(?axis, points = points.len(), "computed price curve");
    Ok(PriceCurve {
        axis,
        base: *base,
        points,
    })
}

/// Premiums across strikes from `lower_factor * S` to `upper_factor * S`.
pub fn strike_curve(base: &PricingInputs, range: &StrikeSweep) -> PricingResult<PriceCurve> {
    let s = base.spot_price;
    let grid = linspace(range.lower_factor * s, range.upper_factor * s, range.points);
    sweep(base, SweepAxis::Strike, &grid)
}

/// Premiums across maturities from `min_days` to `max_years`.
///
/// `days_per_year` converts the lower bound from calendar days to years.
pub fn maturity_curve(
    base: &PricingInputs,
    range: &MaturitySweep,
    days_per_year: f64,
) -> PricingResult<PriceCurve> {
    let grid = linspace(range.min_days / days_per_year, range.max_years, range.points);
    sweep(base, SweepAxis::Maturity, &grid)
}

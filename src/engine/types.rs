use crate::models::bs::PricingInputs;

/// Which field of [`PricingInputs`] a curve varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SweepAxis {
    /// Strike price, in currency units
    Strike,
    /// Time to maturity, in years
    Maturity,
}

/// Call and put premium at one grid value of the swept field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Value of the swept field
    pub x: f64,
    pub call: f64,
    pub put: f64,
}

/// Premiums across a grid of one input, every other input held fixed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceCurve {
    pub axis: SweepAxis,
    /// Inputs the sweep started from; the swept field is overwritten per point
    pub base: PricingInputs,
    pub points: Vec<CurvePoint>,
}

impl PriceCurve {
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn calls(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.call).collect()
    }

    pub fn puts(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.put).collect()
    }

    /// `(min, max)` premium over both legs, handy for chart axes.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .flat_map(|p| [p.call, p.put])
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

//! Error types returned by the pricing and estimation routines.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A precondition on the inputs was violated (non-positive price, maturity
    /// or volatility, zero price inside a return series, degenerate grid...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Too few observations to compute the requested statistic.
    #[error("Insufficient data: need at least {required} observations, got {found}")]
    InsufficientData { required: usize, found: usize },
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn insufficient_data(required: usize, found: usize) -> Self {
        Self::InsufficientData { required, found }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

//! Historical volatility estimation
//!
//! Turns an ordered series of closing prices into the annualized volatility
//! consumed by the Black-Scholes formula.

pub mod estimator;
pub mod types;

pub use estimator::*;
pub use types::*;

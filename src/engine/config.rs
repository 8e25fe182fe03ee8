#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use anyhow::{Context, Result};

use chrono::NaiveDate;

use crate::error::{PricingError, PricingResult};
use crate::models::volatility::{ReturnKind, DEFAULT_TRADING_DAYS_PER_YEAR};

/// Strike grid centred on spot: `[lower_factor * S, upper_factor * S]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeSweep {
    pub lower_factor: f64,
    pub upper_factor: f64,
    pub points: usize,
}

impl Default for StrikeSweep {
    fn default() -> Self {
        Self {
            lower_factor: 0.7,
            upper_factor: 1.3,
            points: 50,
        }
    }
}

/// Maturity grid from `min_days` (calendar days) up to `max_years`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaturitySweep {
    pub min_days: f64,
    pub max_years: f64,
    pub points: usize,
}

impl Default for MaturitySweep {
    fn default() -> Self {
        Self {
            min_days: 1.0,
            max_years: 2.0,
            points: 50,
        }
    }
}

/// Market conventions and sweep grids used around the pricing core.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Sessions per year used to annualize return volatility
    #[cfg_attr(feature = "serde", serde(default = "default_trading_days_per_year"))]
    pub trading_days_per_year: u32,

    /// Day-count basis for turning calendar days to expiry into years
    #[cfg_attr(feature = "serde", serde(default = "default_days_per_year"))]
    pub days_per_year: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub return_kind: ReturnKind,

    #[cfg_attr(feature = "serde", serde(default))]
    pub strike_sweep: StrikeSweep,

    #[cfg_attr(feature = "serde", serde(default))]
    pub maturity_sweep: MaturitySweep,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trading_days_per_year: default_trading_days_per_year(),
            days_per_year: default_days_per_year(),
            return_kind: ReturnKind::default(),
            strike_sweep: StrikeSweep::default(),
            maturity_sweep: MaturitySweep::default(),
        }
    }
}

impl EngineConfig {
    /// Exchange-listed equities: 252 sessions, simple returns
    pub fn equity() -> Self {
        Self::default()
    }

    /// Round-the-clock markets: every calendar day trades, log returns
    pub fn crypto() -> Self {
        Self {
            trading_days_per_year: 365,
            return_kind: ReturnKind::Log,
            ..Self::default()
        }
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse engine config")?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize engine config")
    }

    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn validate(&self) -> PricingResult<()> {
        if self.trading_days_per_year == 0 {
            return Err(PricingError::invalid_input(
                "trading_days_per_year must be positive",
            ));
        }
        if !self.days_per_year.is_finite() || self.days_per_year <= 0.0 {
            return Err(PricingError::invalid_input(format!(
                "days_per_year must be positive, got: {}",
                self.days_per_year
            )));
        }

        let s = &self.strike_sweep;
        if !(s.lower_factor > 0.0 && s.upper_factor > s.lower_factor) || s.points == 0 {
            return Err(PricingError::invalid_input(format!(
                "Invalid strike sweep: {:?}",
                s
            )));
        }

        let m = &self.maturity_sweep;
        if !(m.min_days > 0.0 && m.max_years > m.min_days / self.days_per_year) || m.points == 0 {
            return Err(PricingError::invalid_input(format!(
                "Invalid maturity sweep: {:?}",
                m
            )));
        }
        Ok(())
    }

    /// Convert calendar days to expiry into years under this day count.
    pub fn years_from_days(&self, days: f64) -> f64 {
        days / self.days_per_year
    }

    /// Year fraction from `valuation` to `expiry` in whole calendar days.
    ///
    /// An expiry on or before the valuation date is `InvalidInput`; the
    /// closed form has no value for an expired option.
    pub fn years_to_expiry(&self, valuation: NaiveDate, expiry: NaiveDate) -> PricingResult<f64> {
        let days = expiry.signed_duration_since(valuation).num_days();
        if days <= 0 {
            return Err(PricingError::invalid_input(format!(
                "Expiry {} must be after valuation date {}",
                expiry, valuation
            )));
        }
        Ok(self.years_from_days(days as f64))
    }
}

fn default_trading_days_per_year() -> u32 {
    DEFAULT_TRADING_DAYS_PER_YEAR
}

fn default_days_per_year() -> f64 {
    365.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[test]
    fn partial_toml_fills_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            trading_days_per_year = 260
            return_kind = "log"

            [strike_sweep]
            lower_factor = 0.5
            upper_factor = 1.5
            points = 21
            "#,
        )
        .unwrap();

        assert_eq!(config.trading_days_per_year, 260);
        assert_eq!(config.return_kind, ReturnKind::Log);
        assert_eq!(config.strike_sweep.points, 21);
        assert_eq!(config.maturity_sweep, MaturitySweep::default());
        assert_eq!(config.days_per_year, 365.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
        assert!(EngineConfig::from_toml_str("trading_days_per_year = 0").is_err());
        assert!(EngineConfig::from_toml_str("days_per_year = -1.0").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_round_trip_of_preset() {
        let crypto = EngineConfig::crypto();
        let text = crypto.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), crypto);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("bs_pricer_config_{}.toml", std::process::id()));
        std::fs::write(&path, "days_per_year = 360.0\n").unwrap();
        let config = EngineConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.days_per_year, 360.0);

        assert!(EngineConfig::from_file(path.with_extension("missing")).is_err());
    }

    #[test]
    fn rejects_degenerate_values() {
        let config = EngineConfig {
            trading_days_per_year: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            days_per_year: -1.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.strike_sweep.upper_factor = 0.5;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.maturity_sweep.points = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn presets() {
        assert_eq!(EngineConfig::equity().trading_days_per_year, 252);
        let crypto = EngineConfig::crypto();
        assert_eq!(crypto.trading_days_per_year, 365);
        assert_eq!(crypto.return_kind, ReturnKind::Log);
        assert!(crypto.validate().is_ok());
        assert!((crypto.years_from_days(73.0) - 0.2).abs() < 1e-15);
    }

    #[test]
    fn years_to_expiry_counts_calendar_days() {
        let config = EngineConfig::equity();
        let valuation = NaiveDate::from_ymd_opt(2024, 2, 12).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        let t = config.years_to_expiry(valuation, expiry).unwrap();
        assert!((t - 30.0 / 365.0).abs() < 1e-15);

        let act_360 = EngineConfig {
            days_per_year: 360.0,
            ..EngineConfig::default()
        };
        assert!((act_360.years_to_expiry(valuation, expiry).unwrap() - 30.0 / 360.0).abs() < 1e-15);
    }

    #[test]
    fn years_to_expiry_rejects_past_and_same_day() {
        let config = EngineConfig::equity();
        let valuation = NaiveDate::from_ymd_opt(2024, 2, 12).unwrap();
        assert!(config
            .years_to_expiry(valuation, valuation)
            .unwrap_err()
            .is_invalid_input());
        let past = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert!(config
            .years_to_expiry(valuation, past)
            .unwrap_err()
            .is_invalid_input());
    }
}

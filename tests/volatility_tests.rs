
use chrono::NaiveDate;

use bs_pricer::models::volatility::annualized_volatility_with;
use bs_pricer::{
    annualized_volatility, price, price_from_history, returns, EngineConfig, HistoricalSeries,
    OptionKind, PricingError, ReturnKind,
};
use test_utils::load_daily_closes;

/// Annualized volatility of the fixture, simple and log returns.
#[test]
fn test_fixture_volatility() {
    let series = load_daily_closes();
    assert_eq!(series.len(), 30);
    assert_eq!(series.last_close(), Some(187.21));

    let simple = annualized_volatility(&series, 252).unwrap();
    assert!(
        (simple - 0.168_004_597_621_018_2).abs() < 1e-12,
        "Simple-return vol should be ~16.80%, got {}",
        simple
    );

    let log = annualized_volatility_with(&series, 252, ReturnKind::Log).unwrap();
    assert!((log - 0.168_158_272_009_437_75).abs() < 1e-12, "got {}", log);

    let crypto = annualized_volatility_with(&series, 365, ReturnKind::Log).unwrap();
    assert!((crypto - 0.202_378_511_690_445_43).abs() < 1e-12, "got {}", crypto);
}

#[test]
fn test_returns_length_and_sign() {
    let series = load_daily_closes();
    let rets = returns(&series, ReturnKind::Simple).unwrap();
    assert_eq!(rets.len(), series.len() - 1);

    let closes = series.closes();
    for (i, r) in rets.iter().enumerate() {
        assert_eq!(r.signum(), (closes[i + 1] - closes[i]).signum());
    }
}

/// A flat series gives exactly zero, which the pricer then rejects.
#[test]
fn test_constant_series_flows_into_rejection() {
    let flat = HistoricalSeries::from_closes(vec![100.0, 100.0, 100.0, 100.0]);
    assert_eq!(annualized_volatility(&flat, 252).unwrap(), 0.0);

    let err = price_from_history(
        100.0,
        100.0,
        0.5,
        0.01,
        &flat,
        OptionKind::Call,
        &EngineConfig::equity(),
    )
    .unwrap_err();
    assert!(err.is_invalid_input(), "got {:?}", err);
}

#[test]
fn test_single_point_is_insufficient() {
    let one = HistoricalSeries::from_closes(vec![100.0]);
    assert_eq!(
        annualized_volatility(&one, 252).unwrap_err(),
        PricingError::InsufficientData {
            required: 2,
            found: 1
        }
    );

    let empty = HistoricalSeries::default();
    assert!(annualized_volatility(&empty, 252)
        .unwrap_err()
        .is_insufficient_data());
}

#[test]
fn test_zero_price_in_series() {
    let series = HistoricalSeries::from_closes(vec![101.0, 0.0, 99.0, 100.0]);
    assert!(annualized_volatility(&series, 252)
        .unwrap_err()
        .is_invalid_input());
}

/// Negative or non-finite closes fail for both return transforms instead of
/// leaking NaN into the estimate.
#[test]
fn test_bad_closes_rejected_for_both_return_kinds() {
    let cases = [
        vec![100.0, -5.0, 101.0],
        vec![100.0, f64::NAN, 101.0],
        vec![100.0, 101.0, 0.0],
    ];
    for closes in cases {
        let series = HistoricalSeries::from_closes(closes.clone());
        for kind in [ReturnKind::Simple, ReturnKind::Log] {
            let result = annualized_volatility_with(&series, 252, kind);
            assert!(
                matches!(result, Err(PricingError::InvalidInput(_))),
                "{:?} with {:?} should be InvalidInput, got {:?}",
                closes,
                kind,
                result
            );
        }
    }
}

/// Historical path equals estimating sigma by hand and pricing directly.
#[test]
fn test_price_from_history_matches_direct_path() {
    let series = load_daily_closes();
    let config = EngineConfig::equity();
    let spot = series.last_close().unwrap();
    let t = config.years_from_days(30.0);

    let call = price_from_history(spot, 190.0, t, 0.025, &series, OptionKind::Call, &config)
        .unwrap();
    assert!((call - 2.545_834_699_179_920_3).abs() < 1e-9, "got {}", call);

    let sigma = annualized_volatility(&series, 252).unwrap();
    let direct = price(
        &bs_pricer::PricingInputs::new(spot, 190.0, t, 0.025, sigma).unwrap(),
        OptionKind::Call,
    )
    .unwrap();
    assert_eq!(call.to_bits(), direct.to_bits());
}

/// An expiry date measured from the last observation gives the same price as
/// the equivalent day count.
#[test]
fn test_expiry_date_from_last_observation() {
    let series = load_daily_closes();
    let config = EngineConfig::equity();
    let valuation = *series.dates().last().unwrap();
    assert_eq!(valuation, NaiveDate::from_ymd_opt(2024, 2, 12).unwrap());

    let expiry = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
    let t = config.years_to_expiry(valuation, expiry).unwrap();
    let spot = series.last_close().unwrap();
    let call =
        price_from_history(spot, 190.0, t, 0.025, &series, OptionKind::Call, &config).unwrap();
    assert!((call - 2.545_834_699_179_920_3).abs() < 1e-9, "got {}", call);

    assert!(config
        .years_to_expiry(valuation, valuation)
        .unwrap_err()
        .is_invalid_input());
}

/// Using only the most recent window changes the estimate.
#[test]
fn test_tail_window() {
    let series = load_daily_closes();
    let recent = series.tail(10);
    assert_eq!(recent.len(), 10);
    assert_eq!(recent.dates().len(), 10);

    let full = annualized_volatility(&series, 252).unwrap();
    let window = annualized_volatility(&recent, 252).unwrap();
    assert!(window > 0.0);
    assert_ne!(full, window);
}

#[test]
fn test_csv_rejects_unordered_dates() {
    let data = "date,close\n2024-01-03,100.0\n2024-01-02,101.0\n";
    assert!(HistoricalSeries::from_csv_reader(data.as_bytes()).is_err());

    let malformed = "date,close\n2024-01-02,abc\n";
    assert!(HistoricalSeries::from_csv_reader(malformed.as_bytes()).is_err());

    assert!(HistoricalSeries::from_csv_path("tests/data/does_not_exist.csv").is_err());
}

use chrono::NaiveDate;

use crate::error::{PricingError, PricingResult};

/// Transform applied to consecutive closes before taking the deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReturnKind {
    /// `(P_i - P_{i-1}) / P_{i-1}`
    #[default]
    Simple,
    /// `ln(P_i / P_{i-1})`
    Log,
}

/// Ordered closing prices, oldest first.
///
/// Dates are optional: a series built with [`HistoricalSeries::from_closes`]
/// carries no calendar and its order is taken as given. A dated series must
/// be strictly ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalSeries {
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
}

impl HistoricalSeries {
    /// Build a dated series. Rejects dates that are not strictly ascending.
    pub fn new(points: Vec<(NaiveDate, f64)>) -> PricingResult<Self> {
        if let Some(pos) = points.windows(2).position(|w| w[1].0 <= w[0].0) {
            return Err(PricingError::invalid_input(format!(
                "Series dates must be strictly ascending: {} is followed by {}",
                points[pos].0,
                points[pos + 1].0
            )));
        }

        let (dates, closes) = points.into_iter().unzip();
        Ok(Self { dates, closes })
    }

    pub fn from_closes(closes: Vec<f64>) -> Self {
        Self {
            dates: Vec::new(),
            closes,
        }
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Observation dates, empty for an undated series.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Most recent close, the usual choice of spot when pricing off history.
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// Keep only the most recent `n` observations.
    pub fn tail(&self, n: usize) -> Self {
        let start = self.closes.len().saturating_sub(n);
        Self {
            dates: if self.dates.is_empty() {
                Vec::new()
            } else {
                self.dates[start..].to_vec()
            },
            closes: self.closes[start..].to_vec(),
        }
    }
}

#[cfg(feature = "serde")]
mod csv_io {
    use super::*;
    use anyhow::{Context, Result};
    use std::io::Read;
    use std::path::Path;

    /// One row of a daily price file. Accepts lower-case headers as well as
    /// the capitalised `Date`/`Close` columns of common data vendors; extra
    /// columns are ignored.
    #[derive(Debug, serde::Deserialize)]
    struct CsvRow {
        #[serde(alias = "Date")]
        date: NaiveDate,
        #[serde(alias = "Close")]
        close: f64,
    }

    impl HistoricalSeries {
        /// Load a `date,close` CSV (dates as `YYYY-MM-DD`) from any reader.
        pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
            let mut rdr = csv::ReaderBuilder::new()
                .has_headers(true)
                .trim(csv::Trim::All)
                .from_reader(reader);

            let mut points = Vec::new();
            for (line, result) in rdr.deserialize::<CsvRow>().enumerate() {
                let row =
                    result.with_context(|| format!("Failed to parse price row {}", line + 1))?;
                points.push((row.date, row.close));
            }

            Ok(HistoricalSeries::new(points)?)
        }

        pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
            let path = path.as_ref();
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open price file {}", path.display()))?;
            Self::from_csv_reader(file)
                .with_context(|| format!("Failed to load price series from {}", path.display()))
        }
    }
}

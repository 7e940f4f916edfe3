// =============================================================================
// Daily price series
// =============================================================================
//
// An ordered sequence of (trading date, closing price) pairs. Dates are
// strictly increasing with no duplicates; non-trading days are simply absent
// from the series (no forward-fill).

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day: date and closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Ordered daily close series for a single symbol.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from already-ordered points.
    ///
    /// Fails when dates are out of order or duplicated — the indicator engine
    /// relies on every point being a distinct, later trading day.
    pub fn from_points(points: Vec<PricePoint>) -> Result<Self> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                bail!(
                    "price series dates must be strictly increasing: {} followed by {}",
                    pair[0].date,
                    pair[1].date
                );
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn accepts_strictly_increasing_dates() {
        let series = PriceSeries::from_points(vec![
            PricePoint { date: d(2), close: 100.0 },
            PricePoint { date: d(3), close: 101.0 },
            PricePoint { date: d(5), close: 99.5 },
        ])
        .unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.points()[2].close, 99.5);
    }

    #[test]
    fn rejects_duplicate_dates() {
        let result = PriceSeries::from_points(vec![
            PricePoint { date: d(2), close: 100.0 },
            PricePoint { date: d(2), close: 101.0 },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let result = PriceSeries::from_points(vec![
            PricePoint { date: d(3), close: 100.0 },
            PricePoint { date: d(2), close: 101.0 },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_series_is_valid() {
        let series = PriceSeries::from_points(Vec::new()).unwrap();
        assert!(series.is_empty());
    }
}

// =============================================================================
// Shared types for the mean-reversion scanner
// =============================================================================

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Validated parameters for a single strategy run.
#[derive(Debug, Clone)]
pub struct StrategyParams {
    /// Ticker symbol, uppercased (e.g. "AAPL").
    pub symbol: String,
    /// Number of trading days to fetch.
    pub days: u32,
    /// Moving-average window length.
    pub window: usize,
    /// Band offset in standard deviations.
    pub std_factor: f64,
}

impl StrategyParams {
    /// Check every parameter against its accepted range.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.is_empty() {
            bail!("symbol must not be empty");
        }
        if !(10..=1000).contains(&self.days) {
            bail!("days must be between 10 and 1000, got {}", self.days);
        }
        if !(5..=100).contains(&self.window) {
            bail!("window must be between 5 and 100, got {}", self.window);
        }
        if !(1.0..=3.0).contains(&self.std_factor) {
            bail!(
                "std-factor must be between 1.0 and 3.0, got {}",
                self.std_factor
            );
        }
        Ok(())
    }
}

/// One row of the filtered indicator table — only dates with a full window
/// of history behind them ever become rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub price: f64,
    pub sma: f64,
    pub std_dev: f64,
    pub upper_band: f64,
    pub lower_band: f64,
    pub buy_signal: bool,
    pub sell_signal: bool,
}

/// Return statistics over the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub first_price: f64,
    pub last_price: f64,
    pub return_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> StrategyParams {
        StrategyParams {
            symbol: "AAPL".to_string(),
            days: 252,
            window: 20,
            std_factor: 2.0,
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let mut p = params();
        p.days = 5;
        assert!(p.validate().is_err());

        let mut p = params();
        p.window = 101;
        assert!(p.validate().is_err());

        let mut p = params();
        p.std_factor = 0.5;
        assert!(p.validate().is_err());

        let mut p = params();
        p.symbol = String::new();
        assert!(p.validate().is_err());
    }
}

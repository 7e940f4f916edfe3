// =============================================================================
// Mean-reversion strategy
// =============================================================================
//
// Maps a daily close series to the Bollinger indicator table plus a simple
// return summary. A close below the lower band flags a buy, above the upper
// band a sell; both comparisons are strict, so a price sitting exactly on a
// collapsed band triggers nothing.

use crate::indicators::BollingerEngine;
use crate::series::PriceSeries;
use crate::types::{IndicatorRow, StrategyParams, Summary};

/// Full output of one strategy run.
#[derive(Debug, Clone)]
pub struct StrategyReport {
    /// Indicator rows, one per date with a full window of history.
    pub rows: Vec<IndicatorRow>,
    /// Return statistics over `rows`; `None` when no row was produced.
    pub summary: Option<Summary>,
}

/// Evaluate the mean-reversion strategy over `series`.
///
/// Pure function of its inputs: no I/O, no hidden state. Dates without a full
/// window behind them are dropped entirely rather than emitted as nulls.
pub fn evaluate(series: &PriceSeries, params: &StrategyParams) -> StrategyReport {
    let mut engine = BollingerEngine::new(params.window, params.std_factor);
    let mut rows = Vec::with_capacity(series.len().saturating_sub(params.window - 1));

    for point in series.points() {
        if let Some(bands) = engine.push(point.close) {
            rows.push(IndicatorRow {
                date: point.date,
                price: point.close,
                sma: bands.sma,
                std_dev: bands.std_dev,
                upper_band: bands.upper,
                lower_band: bands.lower,
                buy_signal: point.close < bands.lower,
                sell_signal: point.close > bands.upper,
            });
        }
    }

    let summary = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => Some(Summary {
            first_price: first.price,
            last_price: last.price,
            return_pct: (last.price - first.price) / first.price * 100.0,
        }),
        _ => None,
    };

    StrategyReport { rows, summary }
}

// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ). σ is the *sample* standard deviation of the
// window (denominator W - 1), matching the usual charting convention.
//
// The engine keeps an explicit fixed-size sliding window with a running sum
// and running sum of squares, so each price costs O(1) instead of re-scanning
// the window.

use std::collections::VecDeque;

/// One full-window Bollinger computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerPoint {
    pub sma: f64,
    pub std_dev: f64,
    pub upper: f64,
    pub lower: f64,
}

/// Streaming Bollinger Band calculator over a fixed window.
///
/// Feed prices oldest-first through [`push`](Self::push); it returns `None`
/// until a full window has accumulated, then one [`BollingerPoint`] per price.
#[derive(Debug)]
pub struct BollingerEngine {
    window: usize,
    factor: f64,
    buf: VecDeque<f64>,
    sum: f64,
    sum_sq: f64,
}

impl BollingerEngine {
    /// Create an engine for the given window length and band factor.
    ///
    /// The sample standard deviation needs at least two prices per window.
    pub fn new(window: usize, factor: f64) -> Self {
        debug_assert!(window >= 2, "window must hold at least two prices");
        Self {
            window,
            factor,
            buf: VecDeque::with_capacity(window + 1),
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    /// Push the next closing price.
    ///
    /// Returns `Some(BollingerPoint)` once `window` prices have accumulated,
    /// `None` while history is still insufficient.
    pub fn push(&mut self, price: f64) -> Option<BollingerPoint> {
        self.buf.push_back(price);
        self.sum += price;
        self.sum_sq += price * price;

        if self.buf.len() > self.window {
            // Evict the oldest price from the running accumulators.
            if let Some(old) = self.buf.pop_front() {
                self.sum -= old;
                self.sum_sq -= old * old;
            }
        }

        if self.buf.len() < self.window {
            return None;
        }

        let n = self.window as f64;
        let sma = self.sum / n;
        // Clamp at zero: float cancellation on an all-identical window can
        // otherwise produce a tiny negative variance.
        let variance = ((self.sum_sq - self.sum * self.sum / n) / (n - 1.0)).max(0.0);
        let std_dev = variance.sqrt();

        Some(BollingerPoint {
            sma,
            std_dev,
            upper: sma + self.factor * std_dev,
            lower: sma - self.factor * std_dev,
        })
    }
}

// =============================================================================
// Yahoo Finance chart API client
// =============================================================================
//
// Public endpoint, no authentication. The chart response nests timestamps and
// quote arrays several levels deep and may carry null closes on gap days; all
// reshaping into a flat (date, close) series happens here, so the indicator
// engine only ever sees an ordered `PriceSeries`.
//
// Invalid symbols come back as a `chart.error` object (usually alongside an
// HTTP 404) with a human-readable description — that description is what the
// user ultimately sees.

use anyhow::{bail, Context, Result};
use chrono::DateTime;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::series::{PricePoint, PriceSeries};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// HTTP client for daily close series.
#[derive(Clone)]
pub struct YahooClient {
    base_url: String,
    client: reqwest::Client,
}

impl YahooClient {
    /// Create a client. `MEANREV_BASE_URL` overrides the production base URL
    /// so integration setups can point at a stub server.
    pub fn new() -> Result<Self> {
        let base_url =
            std::env::var("MEANREV_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;

        debug!(base_url = %base_url, "YahooClient initialised");

        Ok(Self { base_url, client })
    }

    /// GET /v8/finance/chart/{symbol} — fetch `days` daily bars and flatten
    /// them into an ordered close series.
    #[instrument(skip(self), name = "yahoo::fetch_daily_closes")]
    pub async fn fetch_daily_closes(&self, symbol: &str, days: u32) -> Result<PriceSeries> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}d&interval=1d",
            self.base_url, symbol, days
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("GET /v8/finance/chart request failed")?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .context("failed to read chart response body")?;

        // Error bodies still follow the chart envelope, so parse before
        // checking the status to surface the provider's own description.
        let parsed: ChartResponse = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse chart response (HTTP {status})"))?;

        let series = flatten_chart(parsed, symbol)?;
        if !status.is_success() {
            bail!("provider returned HTTP {status} for {symbol}");
        }

        debug!(symbol, points = series.len(), "daily closes fetched");
        Ok(series)
    }
}

// -----------------------------------------------------------------------------
// Response envelope
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Flatten the nested chart envelope into an ordered (date, close) series.
///
/// Null closes (provider gaps) are skipped — a missing trading day is simply
/// absent from the series.
fn flatten_chart(resp: ChartResponse, symbol: &str) -> Result<PriceSeries> {
    if let Some(err) = resp.chart.error {
        bail!("provider error for {symbol}: {} ({})", err.description, err.code);
    }

    let result = resp
        .chart
        .result
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .with_context(|| format!("no chart result returned for {symbol}"))?;

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .with_context(|| format!("chart response for {symbol} is missing close prices"))?;

    let mut points = Vec::with_capacity(result.timestamp.len());
    for (ts, close) in result.timestamp.iter().zip(quote.close) {
        let Some(close) = close else { continue };
        let date = DateTime::from_timestamp(*ts, 0)
            .with_context(|| format!("timestamp {ts} out of range"))?
            .date_naive();
        points.push(PricePoint { date, close });
    }

    if points.is_empty() {
        bail!("no price data returned for {symbol}");
    }

    PriceSeries::from_points(points)
        .with_context(|| format!("provider returned an unordered series for {symbol}"))
}

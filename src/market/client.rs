//! Market data client for the CoinGecko markets endpoint
//!
//! One HTTP GET per fetch cycle, 10 s timeout, no caching. Status codes are
//! surfaced as distinct `FetchError` variants so the monitor loop can log
//! each outcome and keep running; nothing in here is fatal to the caller.

use std::time::Duration;

use reqwest::header::{HeaderValue, CACHE_CONTROL, RETRY_AFTER};
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::MonitorConfig;
use crate::market::types::MarketTicker;

/// CoinGecko markets endpoint
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3/coins/markets";

/// Fetch-path error taxonomy
///
/// Every variant is absorbed by the monitor loop; the snapshot is left
/// untouched on all of them.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP 429; the wait is taken from Retry-After or the configured fallback
    #[error("rate limited, retry in {} seconds", wait.as_secs())]
    RateLimited { wait: Duration },

    /// Any other non-200 HTTP status
    #[error("provider returned status code {0}")]
    Provider(StatusCode),

    /// Timeout, connection refusal, DNS failure
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Unexpected or undecodable payload shape
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// HTTP client for the markets endpoint
#[derive(Debug, Clone)]
pub struct MarketClient {
    http: reqwest::Client,
    base_url: String,
    asset_id: String,
    vs_currency: String,
    request_timeout: Duration,
    rate_limit_fallback: Duration,
}

impl MarketClient {
    /// Create a client against the public CoinGecko endpoint
    pub fn new(config: &MonitorConfig) -> Self {
        Self::with_base_url(config, COINGECKO_API_URL)
    }

    /// Create a client against an arbitrary base URL (tests point this at a
    /// mock server)
    pub fn with_base_url(config: &MonitorConfig, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            asset_id: config.asset_id.clone(),
            vs_currency: config.vs_currency.clone(),
            request_timeout: config.request_timeout,
            rate_limit_fallback: config.rate_limit_fallback,
        }
    }

    /// Fetch the first ticker record for the configured asset
    ///
    /// - 200 → decoded first element of the JSON array
    /// - 429 → `RateLimited` with the Retry-After wait (or fallback)
    /// - other status → `Provider`
    /// - network-level failure → `Transport`
    /// - empty array / undecodable body → `Malformed`
    pub async fn fetch_markets(&self) -> FetchResult<MarketTicker> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("vs_currency", self.vs_currency.as_str()),
                ("ids", self.asset_id.as_str()),
            ])
            .header(CACHE_CONTROL, "no-cache")
            .timeout(self.request_timeout)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let wait = retry_after_wait(
                response.headers().get(RETRY_AFTER),
                self.rate_limit_fallback,
            );
            return Err(FetchError::RateLimited { wait });
        }
        if status != StatusCode::OK {
            return Err(FetchError::Provider(status));
        }

        let tickers: Vec<MarketTicker> = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        tickers
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Malformed("empty markets array".to_string()))
    }
}

/// Resolve the rate-limit wait from an optional Retry-After header value.
/// Only the integer-seconds form is honored; anything else falls back.
fn retry_after_wait(header: Option<&HeaderValue>, fallback: Duration) -> Duration {
    header
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(fallback)
}

// =============================================================================
// Tests
// =============================================================================

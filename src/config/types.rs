//! Configuration types for the monitor loop
//!
//! The process surface is intentionally bare: no CLI flags, no config file.
//! `MonitorConfig::default()` carries the canonical values; the struct exists
//! so intervals and tick granularity are explicit configuration rather than
//! constants buried in the loop.

use std::time::Duration;

use crate::error::AppError;

/// CoinGecko asset identifier for Optimism
pub const DEFAULT_ASSET_ID: &str = "optimism";

/// Quote currency for all displayed values
pub const DEFAULT_VS_CURRENCY: &str = "usd";

/// Seconds between fetch cycles
const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 30;

/// Input poll slice during the wait phase
const DEFAULT_INPUT_TICK_MS: u64 = 100;

/// Wait applied on HTTP 429 when no Retry-After header is present
const DEFAULT_RATE_LIMIT_FALLBACK_SECS: u64 = 60;

/// Per-request HTTP timeout
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Rolling log history size
const DEFAULT_MAX_LOG_ENTRIES: usize = 5;

/// Monitor loop configuration
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Provider asset identifier (e.g. "optimism")
    pub asset_id: String,
    /// Quote currency (e.g. "usd")
    pub vs_currency: String,
    /// Time between fetch cycles
    pub update_interval: Duration,
    /// Granularity of the input poll during the wait phase
    pub input_tick: Duration,
    /// Rate-limit wait when the provider sends no Retry-After header
    pub rate_limit_fallback: Duration,
    /// HTTP request timeout
    pub request_timeout: Duration,
    /// Cap on the rolling log history
    pub max_log_entries: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            asset_id: DEFAULT_ASSET_ID.to_string(),
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            update_interval: Duration::from_secs(DEFAULT_UPDATE_INTERVAL_SECS),
            input_tick: Duration::from_millis(DEFAULT_INPUT_TICK_MS),
            rate_limit_fallback: Duration::from_secs(DEFAULT_RATE_LIMIT_FALLBACK_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_log_entries: DEFAULT_MAX_LOG_ENTRIES,
        }
    }
}

impl MonitorConfig {
    /// Validate configuration rules
    pub fn validate(&self) -> Result<(), AppError> {
        // Rule: asset and currency cannot be empty
        if self.asset_id.trim().is_empty() {
            return Err(AppError::Config("asset_id cannot be empty".to_string()));
        }
        if self.vs_currency.trim().is_empty() {
            return Err(AppError::Config("vs_currency cannot be empty".to_string()));
        }

        // Rule: all durations must be non-zero
        if self.update_interval.is_zero() {
            return Err(AppError::Config(
                "update_interval must be non-zero".to_string(),
            ));
        }
        if self.input_tick.is_zero() {
            return Err(AppError::Config("input_tick must be non-zero".to_string()));
        }
        if self.request_timeout.is_zero() {
            return Err(AppError::Config(
                "request_timeout must be non-zero".to_string(),
            ));
        }

        // Rule: tick cannot exceed the interval it subdivides
        if self.input_tick > self.update_interval {
            return Err(AppError::Config(format!(
                "input_tick ({:?}) cannot exceed update_interval ({:?})",
                self.input_tick, self.update_interval
            )));
        }

        // Rule: the log panel needs at least one slot
        if self.max_log_entries == 0 {
            return Err(AppError::Config(
                "max_log_entries must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Market data payload types
//!
//! The markets endpoint returns a JSON array of ticker records; only the
//! first element is consumed. Every field is optional: the provider omits
//! or nulls fields freely, and the dashboard renders N/A for whatever is
//! missing.

use serde::Deserialize;

/// One ticker record from the markets endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketTicker {
    pub current_price: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub market_cap: Option<u64>,
    pub total_volume: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
}

//! Market data access
//!
//! This module provides:
//! - The markets-endpoint HTTP client (`MarketClient`)
//! - The fetch error taxonomy (`FetchError`)
//! - Payload types (`MarketTicker`)

mod client;
mod types;

pub use client::{FetchError, FetchResult, MarketClient, COINGECKO_API_URL};
pub use types::MarketTicker;

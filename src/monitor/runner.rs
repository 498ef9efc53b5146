//! The monitor loop: fetch → render → wait, forever
//!
//! Exactly one fetch attempt per cycle. Every fetch outcome (success,
//! rate limit, provider error, transport error, malformed payload) is
//! absorbed here as one log entry; none of them terminate the loop. The
//! only exits are the terminal closing or Ctrl+C.

use std::time::Duration;

use ratatui::{backend::Backend, Terminal};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::MonitorConfig;
use crate::error::Result;
use crate::market::{FetchError, FetchResult, MarketClient, MarketTicker};
use crate::monitor::state::MonitorState;
use crate::tui::ui;
use crate::tui::{KeyAction, KeyInput};

/// Outcome of the wait phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleControl {
    /// Start the next fetch cycle
    Continue,
    /// Stop the loop and let the process exit
    Quit,
}

/// Loop driver owning all monitor state
pub struct Monitor<I: KeyInput> {
    config: MonitorConfig,
    client: MarketClient,
    state: MonitorState,
    input: I,
}

impl<I: KeyInput> Monitor<I> {
    pub fn new(config: MonitorConfig, client: MarketClient, input: I) -> Self {
        let state = MonitorState::new(config.max_log_entries);
        Self {
            config,
            client,
            state,
            input,
        }
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    /// Run the fetch → render → wait cycle until the user quits
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!(
            asset = %self.config.asset_id,
            interval_secs = self.config.update_interval.as_secs(),
            "Monitor loop started"
        );

        loop {
            self.fetch_price().await;
            terminal.draw(|frame| ui::draw(frame, &self.state))?;
            if self.wait_for_next_cycle().await == CycleControl::Quit {
                break;
            }
        }

        info!("Monitor loop stopped");
        Ok(())
    }

    /// One fetch attempt: classify the outcome, log it, and serve the
    /// rate-limit wait if the provider demanded one. The wait is additive
    /// to the normal polling wait, not a replacement for it.
    pub async fn fetch_price(&mut self) {
        let outcome = self.client.fetch_markets().await;
        if let Some(wait) = self.handle_fetch_outcome(outcome) {
            tokio::time::sleep(wait).await;
        }
    }

    /// Apply a fetch outcome to the state. Returns the rate-limit wait when
    /// the provider demanded one; the snapshot is only touched on success.
    fn handle_fetch_outcome(&mut self, outcome: FetchResult<MarketTicker>) -> Option<Duration> {
        match outcome {
            Ok(ticker) => {
                self.state.apply_ticker(&ticker);
                self.state.push_log(format!(
                    "Price fetched successfully: {}",
                    ui::format_usd(self.state.snapshot.price, 3)
                ));
                debug!(
                    event_type = "PRICE_FETCHED",
                    price = ?self.state.snapshot.price,
                    "Snapshot updated"
                );
                None
            }
            Err(FetchError::RateLimited { wait }) => {
                self.state.push_log(format!(
                    "Rate limited by CoinGecko. Retrying in {} seconds.",
                    wait.as_secs()
                ));
                warn!(
                    event_type = "RATE_LIMITED",
                    wait_secs = wait.as_secs(),
                    "Provider rate limit hit"
                );
                Some(wait)
            }
            Err(FetchError::Provider(status)) => {
                self.state.push_log(format!(
                    "Error: Received status code {} from CoinGecko.",
                    status.as_u16()
                ));
                warn!(event_type = "PROVIDER_ERROR", status = %status, "Provider error");
                None
            }
            Err(FetchError::Transport(e)) => {
                self.state.push_log(format!("Network error: {}", e));
                warn!(event_type = "TRANSPORT_ERROR", error = %e, "Network error");
                None
            }
            Err(FetchError::Malformed(reason)) => {
                self.state.push_log(format!("Malformed response: {}", reason));
                warn!(
                    event_type = "MALFORMED_RESPONSE",
                    reason = %reason,
                    "Unexpected payload shape"
                );
                None
            }
        }
    }

    /// Wait out the update interval in input-tick slices.
    ///
    /// The toggle key flips the log panel and ends the wait early; the
    /// next cycle re-fetches and re-renders immediately. The wait starts
    /// when the fetch ends, so total cycle time is wait + fetch duration,
    /// not a fixed period.
    pub async fn wait_for_next_cycle(&mut self) -> CycleControl {
        let deadline = Instant::now() + self.config.update_interval;

        loop {
            let now = Instant::now();
            if now >= deadline {
                return CycleControl::Continue;
            }
            let slice = self.config.input_tick.min(deadline - now);

            match self.input.poll_key(slice).await {
                Some(KeyAction::ToggleLogs) => {
                    self.state.toggle_logs();
                    return CycleControl::Continue;
                }
                Some(KeyAction::Quit) => return CycleControl::Quit,
                None => {}
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

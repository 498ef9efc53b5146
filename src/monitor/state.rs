//! Monitor state: price snapshot, rolling log history, display toggle
//!
//! All mutable state lives here and is owned by the loop runner. No
//! globals, no locking. The log history is a ring buffer: push_back with
//! rotation, rendered newest-first.

use std::collections::VecDeque;

use crate::market::MarketTicker;

/// Latest known market data for the tracked asset
///
/// Fields stay `None` until the first successful fetch and are overwritten
/// wholesale on every success. A failed fetch never touches them, so the
/// dashboard keeps showing stale-but-present values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSnapshot {
    pub price: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub market_cap: Option<u64>,
    pub volume: Option<f64>,
    pub change_pct_24h: Option<f64>,
}

/// Single timestamped log entry for the log panel
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
}

/// State container owned by the monitor loop
#[derive(Debug)]
pub struct MonitorState {
    pub snapshot: PriceSnapshot,
    recent_logs: VecDeque<LogEntry>,
    max_log_entries: usize,
    pub show_logs: bool,
}

impl MonitorState {
    pub fn new(max_log_entries: usize) -> Self {
        Self {
            snapshot: PriceSnapshot::default(),
            recent_logs: VecDeque::with_capacity(max_log_entries),
            max_log_entries,
            show_logs: true,
        }
    }

    /// Overwrite the snapshot from a fetched ticker record.
    /// Every tracked field comes from the same payload; no cross-cycle mixing.
    pub fn apply_ticker(&mut self, ticker: &MarketTicker) {
        self.snapshot = PriceSnapshot {
            price: ticker.current_price,
            high_24h: ticker.high_24h,
            low_24h: ticker.low_24h,
            market_cap: ticker.market_cap,
            volume: ticker.total_volume,
            change_pct_24h: ticker.price_change_percentage_24h,
        };
    }

    /// Add a log entry with automatic rotation
    pub fn push_log(&mut self, message: impl Into<String>) {
        let entry = LogEntry {
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            message: message.into(),
        };
        if self.recent_logs.len() >= self.max_log_entries {
            self.recent_logs.pop_front();
        }
        self.recent_logs.push_back(entry);
    }

    /// Log entries, newest first
    pub fn logs_newest_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.recent_logs.iter().rev()
    }

    pub fn log_count(&self) -> usize {
        self.recent_logs.len()
    }

    /// Flip the log panel visibility
    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn full_ticker() -> MarketTicker {
        MarketTicker {
            current_price: Some(1.2345),
            high_24h: Some(1.5),
            low_24h: Some(1.0),
            market_cap: Some(1_000_000),
            total_volume: Some(500_000.0),
            price_change_percentage_24h: Some(-2.5),
        }
    }

    #[test]
    fn test_new_state_is_empty_with_logs_shown() {
        let state = MonitorState::new(5);
        assert_eq!(state.snapshot, PriceSnapshot::default());
        assert_eq!(state.log_count(), 0);
        assert!(state.show_logs);
    }

    #[test]
    fn test_apply_ticker_overwrites_every_field() {
        let mut state = MonitorState::new(5);
        state.apply_ticker(&full_ticker());

        assert_eq!(state.snapshot.price, Some(1.2345));
        assert_eq!(state.snapshot.high_24h, Some(1.5));
        assert_eq!(state.snapshot.low_24h, Some(1.0));
        assert_eq!(state.snapshot.market_cap, Some(1_000_000));
        assert_eq!(state.snapshot.volume, Some(500_000.0));
        assert_eq!(state.snapshot.change_pct_24h, Some(-2.5));

        // A later payload with holes still overwrites wholesale
        let sparse = MarketTicker {
            current_price: Some(2.0),
            high_24h: None,
            low_24h: None,
            market_cap: None,
            total_volume: None,
            price_change_percentage_24h: None,
        };
        state.apply_ticker(&sparse);
        assert_eq!(state.snapshot.price, Some(2.0));
        assert_eq!(state.snapshot.high_24h, None);
        assert_eq!(state.snapshot.market_cap, None);
    }

    #[test]
    fn test_log_rotation_caps_at_limit() {
        let mut state = MonitorState::new(5);
        for i in 0..12 {
            state.push_log(format!("entry {}", i));
        }
        assert_eq!(state.log_count(), 5);

        // Newest first: 11, 10, 9, 8, 7
        let messages: Vec<&str> = state
            .logs_newest_first()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec!["entry 11", "entry 10", "entry 9", "entry 8", "entry 7"]
        );
    }

    #[test]
    fn test_toggle_logs_flips_and_flips_back() {
        let mut state = MonitorState::new(5);
        assert!(state.show_logs);
        state.toggle_logs();
        assert!(!state.show_logs);
        state.toggle_logs();
        assert!(state.show_logs);
    }

    #[test]
    fn test_log_entries_carry_timestamps() {
        let mut state = MonitorState::new(5);
        state.push_log("hello");
        let entry = state.logs_newest_first().next().unwrap();
        // %Y-%m-%d %H:%M:%S
        assert_eq!(entry.timestamp.len(), 19);
        assert_eq!(entry.message, "hello");
    }

    // =========================================================================
    // Property-based tests (proptest)
    // =========================================================================
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn log_history_never_exceeds_cap(messages in prop::collection::vec(0u8..5, 0..64)) {
                let mut state = MonitorState::new(5);
                for (i, kind) in messages.iter().enumerate() {
                    // Any fetch outcome produces exactly one entry
                    state.push_log(format!("outcome {} #{}", kind, i));
                    prop_assert!(state.log_count() <= 5);
                }
            }

            #[test]
            fn logs_stay_newest_first(count in 1usize..40) {
                let mut state = MonitorState::new(5);
                for i in 0..count {
                    state.push_log(format!("{}", i));
                }
                let seen: Vec<usize> = state
                    .logs_newest_first()
                    .map(|e| e.message.parse().unwrap())
                    .collect();
                for pair in seen.windows(2) {
                    prop_assert!(pair[0] > pair[1], "not newest-first: {:?}", seen);
                }
                prop_assert_eq!(seen[0], count - 1);
            }
        }
    }
}

//! Monitor loop and its state
//!
//! This module provides:
//! - The loop driver (`Monitor`): fetch → render → wait
//! - The state container (`MonitorState`, `PriceSnapshot`, `LogEntry`)

mod runner;
mod state;

pub use runner::{CycleControl, Monitor};
pub use state::{LogEntry, MonitorState, PriceSnapshot};

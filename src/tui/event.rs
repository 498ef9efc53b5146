//! Keyboard input for the monitor loop
//!
//! Uses crossterm's EventStream for non-blocking, async-compatible input
//! that behaves the same on every OS family. The loop polls in small
//! timeout slices; the `KeyInput` trait is the seam that lets tests script
//! keystrokes without a terminal.

use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use tracing::warn;

/// Action derived from a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Toggle the log panel (case-insensitive L)
    ToggleLogs,
    /// Stop the loop and restore the terminal (Ctrl+C under raw mode)
    Quit,
}

/// Non-blocking keystroke source
///
/// One production implementation (`CrosstermInput`); tests use a scripted
/// stub. `poll_key` waits at most `timeout` and returns the action of the
/// first mapped keystroke, or `None` if the slice elapsed or the key has no
/// effect.
#[async_trait]
pub trait KeyInput {
    async fn poll_key(&mut self, timeout: Duration) -> Option<KeyAction>;
}

/// Crossterm-backed input source
pub struct CrosstermInput {
    events: EventStream,
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self {
            events: EventStream::new(),
        }
    }
}

impl Default for CrosstermInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyInput for CrosstermInput {
    async fn poll_key(&mut self, timeout: Duration) -> Option<KeyAction> {
        let maybe_event = tokio::time::timeout(timeout, self.events.next()).await;

        match maybe_event {
            // Slice elapsed, no input
            Err(_) => None,
            // Stream ended (terminal closed): treat as external termination
            Ok(None) => Some(KeyAction::Quit),
            Ok(Some(Err(e))) => {
                warn!(event_type = "TERMINAL_IO_ERROR", error = %e, "Terminal I/O error during event polling");
                None
            }
            Ok(Some(Ok(Event::Key(key)))) => classify_key(key),
            Ok(Some(Ok(_))) => None,
        }
    }
}

/// Map a key event to its action, if any
///
/// Only the toggle key and Ctrl+C do anything; every other key is ignored.
/// Release/repeat events are filtered so Windows (which reports both press
/// and release) does not double-toggle.
pub fn classify_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Char('l') | KeyCode::Char('L') => Some(KeyAction::ToggleLogs),
        _ => None,
    }
}

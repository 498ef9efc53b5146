//! Terminal user interface
//!
//! Raw-mode alternate-screen dashboard on crossterm + ratatui.
//!
//! # Keyboard Controls
//! - `L`: toggle the log panel
//! - `Ctrl+C`: stop the monitor and restore the terminal

pub mod event;
pub mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

pub use event::{classify_key, CrosstermInput, KeyAction, KeyInput};

/// Enter raw mode + alternate screen and build the terminal handle
pub fn init_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Leave the alternate screen and disable raw mode
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Chain a panic hook that restores the terminal first, so a panic message
/// lands on a usable screen instead of the alternate buffer
pub fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        hook(info);
    }));
}

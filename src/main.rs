//! op_terminal entry point
//!
//! 1. dotenv + diagnostic logging (stderr, opt-in via LOG_FORMAT)
//! 2. Config validation
//! 3. Raw-mode alternate-screen terminal
//! 4. Monitor loop until Ctrl+C

use op_terminal::config::{init_logging, MonitorConfig};
use op_terminal::market::MarketClient;
use op_terminal::monitor::Monitor;
use op_terminal::tui::{self, CrosstermInput};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenvy::dotenv().ok();
    init_logging();

    let config = MonitorConfig::default();
    config.validate()?;

    let client = MarketClient::new(&config);
    let input = CrosstermInput::new();
    let mut monitor = Monitor::new(config, client, input);

    // Restore the terminal even if the loop panics
    tui::install_panic_hook();
    let mut terminal = tui::init_terminal()?;

    let run_result = monitor.run(&mut terminal).await;

    tui::restore_terminal()?;
    run_result?;
    Ok(())
}

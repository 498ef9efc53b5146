//! Logging configuration for the monitor
//!
//! The dashboard owns the terminal, so tracing output is opt-in and goes to
//! stderr where it can be redirected (`2>monitor.log`). The on-screen log
//! panel is product state, not the tracing pipeline.
//!
//! # Environment Variables
//! - `LOG_FORMAT`: `json` or `pretty` enables stderr diagnostics; unset
//!   leaves tracing uninstalled (the TUI owns the screen)
//! - `RUST_LOG`: log level filter (default: `info`)

use tracing_subscriber::EnvFilter;

/// Initialize diagnostic logging with configurable format
///
/// Reads `LOG_FORMAT` from environment:
/// - `json`: machine-parseable JSON on stderr
/// - `pretty`: human-readable output on stderr
/// - anything else: no subscriber; tracing events are dropped so they can
///   never corrupt the alternate-screen display
pub fn init_logging() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_format.as_str() {
        "pretty" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .pretty()
                .init();
        }
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    // NOTE: Unit testing `init_logging()` directly is not practical because
    // tracing_subscriber can only be initialized ONCE per process and test
    // parallelism races on env vars. The format selection logic is validated
    // below; stderr output is checked manually with
    // `LOG_FORMAT=json cargo run 2>&1 >/dev/null | head -1 | jq .`

    #[test]
    fn test_unset_format_means_no_subscriber() {
        let format = String::new();
        let installs = matches!(format.as_str(), "json" | "pretty");
        assert!(!installs);
    }

    #[test]
    fn test_format_detection() {
        let test_cases = vec![
            ("json", true),
            ("pretty", true),
            ("JSON", false), // case sensitive
            ("tui", false),
            ("", false),
        ];

        for (input, expected) in test_cases {
            let installs = matches!(input, "json" | "pretty");
            assert_eq!(installs, expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_env_filter_fallback() {
        use tracing_subscriber::EnvFilter;

        // When RUST_LOG is not set, should create a valid filter with default
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        assert!(!format!("{:?}", filter).is_empty());
    }
}

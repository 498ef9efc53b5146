//! Application-wide error types using thiserror
//!
//! Fetch-path errors are deliberately NOT part of this enum: they are
//! absorbed inside the monitor loop (see `market::FetchError`) and never
//! terminate the program. `AppError` covers the setup and terminal
//! failures that are actually fatal.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

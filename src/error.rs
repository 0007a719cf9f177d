use std::io;
use thiserror::Error;

/// Custom error type for the wifimon application
#[derive(Error, Debug)]
pub enum WifiMonError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Scan error: {0}")]
    Scan(String),
}

/// Result type alias for the wifimon application
pub type Result<T> = std::result::Result<T, WifiMonError>;

impl WifiMonError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WifiMonError::Config(msg.into())
    }

    /// Create a scan error
    pub fn scan<S: Into<String>>(msg: S) -> Self {
        WifiMonError::Scan(msg.into())
    }
}

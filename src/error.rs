use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// The caller's selection is incomplete or malformed
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
    /// The pricing configuration is missing entries or contains invalid values
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// Implement conversions from common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigError(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

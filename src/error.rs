//! Domain error types for scrollsense
//!
//! Provides structured error types for different domains:
//! - `ConfigError` for loading and validating configuration
//! - `ScrollsenseError` as the top-level error type
//!
//! The scroll behaviour itself has no failure modes; these cover the
//! configuration layer and the terminal host.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for scrollsense
#[derive(Debug, Error)]
pub enum ScrollsenseError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid axes '{0}' (expected vertical, horizontal or both)")]
    InvalidAxes(String),

    #[error("Debounce window must be positive, got {0}ms")]
    InvalidDebounce(u64),
}

/// Result type alias for ScrollsenseError
pub type Result<T> = std::result::Result<T, ScrollsenseError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Conversion from anyhow::Error for callers mixing error styles
impl From<anyhow::Error> for ScrollsenseError {
    fn from(err: anyhow::Error) -> Self {
        ScrollsenseError::Other(err.to_string())
    }
}

impl From<String> for ScrollsenseError {
    fn from(msg: String) -> Self {
        ScrollsenseError::Other(msg)
    }
}

impl From<&str> for ScrollsenseError {
    fn from(msg: &str) -> Self {
        ScrollsenseError::Other(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_wraps() {
        let err: ScrollsenseError = ConfigError::InvalidDebounce(0).into();
        assert_eq!(
            err.to_string(),
            "Config error: Debounce window must be positive, got 0ms"
        );
    }

    #[test]
    fn test_from_str_message() {
        let err: ScrollsenseError = "boom".into();
        assert!(matches!(err, ScrollsenseError::Other(ref m) if m == "boom"));
    }
}

//! Configuration file support for scrollsense.
//!
//! Configuration is loaded from `~/.config/scrollsense/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/scrollsense/config.toml
//! debounce_ms = 250
//! axes = "vertical"
//! shows_indicators = true
//! bounces = false
//! lines = 500
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::scroll::{Axes, DEFAULT_WINDOW, ScrollViewOptions};

/// Environment variable overriding the debounce window in milliseconds
pub const DEBOUNCE_ENV: &str = "SCROLLSENSE_DEBOUNCE_MS";

const DEFAULT_LINES: usize = 200;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Quiet period before a scroll counts as ended
    pub debounce_ms: Option<u64>,

    /// Scrollable axes
    pub axes: Option<Axes>,

    /// Draw scrollbars
    pub shows_indicators: Option<bool>,

    /// Allow overscroll that springs back
    pub bounces: Option<bool>,

    /// Number of demo content lines
    pub lines: Option<usize>,
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub debounce_ms: Option<u64>,
    pub axes: Option<Axes>,
    pub shows_indicators: Option<bool>,
    pub bounces: Option<bool>,
    pub lines: Option<usize>,
}

impl Config {
    /// Load configuration from the default config file path, then apply
    /// environment variables on top.
    ///
    /// Falls back to defaults if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        let config = if !config_path.exists() {
            Self::default()
        } else {
            match Self::load_from(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: {}", e);
                    Self::default()
                }
            }
        };

        config.with_env(std::env::var(DEBOUNCE_ENV).ok().as_deref())
    }

    /// Apply the debounce environment value over file values.
    ///
    /// Values that are not a positive number are ignored with a warning.
    pub fn with_env(mut self, debounce_ms: Option<&str>) -> Self {
        if let Some(raw) = debounce_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => self.debounce_ms = Some(ms),
                _ => eprintln!("Warning: ignoring {}={}", DEBOUNCE_ENV, raw),
            }
        }
        self
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scrollsense")
    }

    fn validate(&self) -> ConfigResult<()> {
        match self.debounce_ms {
            Some(0) => Err(ConfigError::InvalidDebounce(0)),
            _ => Ok(()),
        }
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over environment and config file values.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.debounce_ms.is_some() {
            self.debounce_ms = overrides.debounce_ms;
        }
        if overrides.axes.is_some() {
            self.axes = overrides.axes;
        }
        if overrides.shows_indicators.is_some() {
            self.shows_indicators = overrides.shows_indicators;
        }
        if overrides.bounces.is_some() {
            self.bounces = overrides.bounces;
        }
        if overrides.lines.is_some() {
            self.lines = overrides.lines;
        }
        self
    }

    /// Get the debounce window, falling back to the default.
    pub fn debounce(&self) -> Duration {
        self.debounce_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_WINDOW)
    }

    pub fn lines(&self) -> usize {
        self.lines.unwrap_or(DEFAULT_LINES)
    }

    /// Options for the scroll view built from this configuration.
    pub fn scroll_view_options(&self) -> ScrollViewOptions {
        ScrollViewOptions {
            axes: self.axes.unwrap_or_default(),
            shows_indicators: self.shows_indicators.unwrap_or(true),
            bounces: self.bounces.unwrap_or(true),
            debounce: self.debounce(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.debounce_ms.is_none());
        assert!(config.axes.is_none());
        assert_eq!(config.lines(), DEFAULT_LINES);

        let options = config.scroll_view_options();
        assert_eq!(options.axes, Axes::Both);
        assert!(options.shows_indicators);
        assert!(options.bounces);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            debounce_ms = 250
            axes = "vertical"
            bounces = false
            lines = 40
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.debounce_ms, Some(250));
        assert_eq!(config.axes, Some(Axes::Vertical));
        assert_eq!(config.lines(), 40);

        let options = config.scroll_view_options();
        assert_eq!(options.debounce, Duration::from_millis(250));
        assert!(!options.bounces);
        assert!(options.shows_indicators);
    }

    #[test]
    fn test_unknown_axes_rejected() {
        let result: Result<Config, _> = toml::from_str(r#"axes = "diagonal""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config: Config = toml::from_str("debounce_ms = 250\nbounces = true").unwrap();
        let config = config.with_overrides(Overrides {
            debounce_ms: Some(90),
            bounces: Some(false),
            ..Default::default()
        });

        assert_eq!(config.debounce(), Duration::from_millis(90));
        assert_eq!(config.bounces, Some(false));
    }

    #[test]
    fn test_env_beats_file() {
        let config: Config = toml::from_str("debounce_ms = 250").unwrap();
        let config = config.with_env(Some("90"));

        assert_eq!(config.debounce(), Duration::from_millis(90));
    }

    #[test]
    fn test_cli_beats_env_and_file() {
        let config: Config = toml::from_str("debounce_ms = 250").unwrap();
        let config = config.with_env(Some("90")).with_overrides(Overrides {
            debounce_ms: Some(40),
            ..Default::default()
        });

        assert_eq!(config.debounce(), Duration::from_millis(40));
    }

    #[test]
    fn test_invalid_env_keeps_file_value() {
        let config: Config = toml::from_str("debounce_ms = 250").unwrap();

        assert_eq!(config.clone().with_env(Some("0")).debounce(), Duration::from_millis(250));
        assert_eq!(config.clone().with_env(Some("fast")).debounce(), Duration::from_millis(250));
        assert_eq!(config.with_env(None).debounce(), Duration::from_millis(250));
    }

    #[test]
    fn test_load_from_rejects_zero_debounce() {
        let path = std::env::temp_dir().join(format!(
            "scrollsense_config_test_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "debounce_ms = 0").unwrap();

        let result = Config::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::InvalidDebounce(0))));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Config::load_from(Path::new("/nonexistent/scrollsense.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}

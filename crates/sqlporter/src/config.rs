//! Synthesizer configuration.
//!
//! Built in code with chained setters or loaded from a TOML document.

use crate::error::PorterResult;
use serde::Deserialize;

/// Level at which synthesized statements are logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

/// Configuration for the synthesizer's logging.
///
/// Without the `tracing` feature the values are kept but have no effect.
///
/// # Example
/// ```
/// use sqlporter::{LogLevel, SynthesizerConfig};
///
/// let config = SynthesizerConfig::from_toml_str(
///     r#"
///     log_level = "info"
///     max_logged_sql_length = 80
///     "#,
/// )?;
/// assert_eq!(config.log_level, LogLevel::Info);
/// # Ok::<(), sqlporter::PorterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SynthesizerConfig {
    /// Event level for successful synthesis.
    pub log_level: LogLevel,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_logged_sql_length: Option<usize>,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Debug,
            max_logged_sql_length: Some(200),
        }
    }
}

impl SynthesizerConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> PorterResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Override the event level.
    pub fn level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Set maximum SQL length to log.
    pub fn max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = SynthesizerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SynthesizerConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = SynthesizerConfig::from_toml_str("log_level = \"trace\"").unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.max_logged_sql_length, Some(200));
    }

    #[test]
    fn bad_level_is_a_config_error() {
        let err = SynthesizerConfig::from_toml_str("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, crate::PorterError::Config(_)));
    }

    #[test]
    fn builder_methods() {
        let config = SynthesizerConfig::new().level(LogLevel::Warn).no_truncate();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.max_logged_sql_length, None);

        let config = SynthesizerConfig::new().max_logged_sql_length(10);
        assert_eq!(config.max_logged_sql_length, Some(10));
    }
}

//! Error types for sqlporter

use crate::descriptor::Action;
use thiserror::Error;

/// Result type alias for sqlporter operations
pub type PorterResult<T> = Result<T, PorterError>;

/// Errors raised while turning a descriptor into SQL.
///
/// Only structural problems are errors. An empty table name, an unknown
/// operator token or two clauses sharing a placeholder name are all accepted
/// and rendered as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PorterError {
    /// The action name is not one of select/insert/update/delete.
    #[error("Unsupported query action: '{0}'")]
    UnsupportedAction(String),

    /// An INSERT or UPDATE reached synthesis without any fields to write.
    #[error("No modify fields specified for {0} query")]
    MissingFields(Action),

    /// Configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl PorterError {
    /// Create an unsupported action error
    pub fn unsupported_action(name: impl Into<String>) -> Self {
        Self::UnsupportedAction(name.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a missing fields error
    pub fn is_missing_fields(&self) -> bool {
        matches!(self, Self::MissingFields(_))
    }

    /// Check if this is an unsupported action error
    pub fn is_unsupported_action(&self) -> bool {
        matches!(self, Self::UnsupportedAction(_))
    }
}

impl From<toml::de::Error> for PorterError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

//! Error types shared across RELNAV crates

use thiserror::Error;

/// Result alias used throughout RELNAV
pub type NavResult<T> = Result<T, NavError>;

/// Errors produced by the navigation runtime
#[derive(Debug, Error)]
pub enum NavError {
    /// Invalid or unparsable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A sample or request that violates a precondition (e.g. NaN pose)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Topic send/receive failure
    #[error("Communication error: {0}")]
    Communication(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl NavError {
    pub fn config(msg: impl Into<String>) -> Self {
        NavError::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        NavError::InvalidInput(msg.into())
    }

    pub fn communication(msg: impl Into<String>) -> Self {
        NavError::Communication(msg.into())
    }
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        NavError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for NavError {
    fn from(err: serde_yaml::Error) -> Self {
        NavError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for NavError {
    fn from(err: toml::de::Error) -> Self {
        NavError::Serialization(err.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for NavError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        NavError::Internal(format!("Lock poisoned: {}", err))
    }
}

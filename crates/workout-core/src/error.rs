//! Core error types for workout-core.
//!
//! This module defines the error hierarchy using thiserror. Package
//! construction failures, metric failures, validation and configuration
//! errors each get their own enum and fold into [`CoreError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for workout-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Sensor package could not be turned into a training
    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    /// Metric computation failed
    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors raised while reading a sensor package.
///
/// Equivalent to a construction-time value error: the package is rejected
/// and nothing is computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackageError {
    /// Activity code is not in the dispatch table
    #[error("Unknown workout type: '{0}'")]
    UnknownCode(String),

    /// Wrong number of positional values for the activity
    #[error("{code} expects {expected} values, got {got}")]
    Arity {
        code: String,
        expected: usize,
        got: usize,
    },

    /// A positional value has the wrong type
    #[error("Invalid value for '{field}' in {code} package: {value}")]
    InvalidValue {
        code: String,
        field: &'static str,
        value: f64,
    },

    /// A positional value breaks a domain invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised while computing metrics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Calorie formula is only defined for concrete activities
    #[error("Calorie calculation is not implemented for '{training}'")]
    CaloriesNotImplemented { training: &'static str },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home/config directory could not be determined or created
    #[error("Configuration directory unavailable: {0}")]
    NoConfigDir(String),
}

impl ValidationError {
    /// Shorthand for [`ValidationError::InvalidValue`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

//! Shared error types for growthmap.
//!
//! The calculators are total wherever a numeric fallback is defined
//! (progress against a zero target is 0%). Only genuine configuration
//! mistakes, such as a funnel whose first stage has no entrants, surface
//! as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for growthmap operations
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A ratio was requested against a zero denominator that has no defined fallback
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    /// Operator override outside its declared bounds
    #[error("{name} = {value} is out of range (expected {min}..={max})")]
    OutOfRangeInput {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Lookup for a metric that the record store does not define
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// Status supplied for a task the tracker does not list
    #[error("Unknown task: {0}")]
    UnknownTask(String),

    /// Invalid configuration contents
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file could not be parsed
    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MetricsError {
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    pub fn out_of_range(name: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRangeInput {
            name: name.into(),
            value,
            min,
            max,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Errors the operator can fix by editing input or config
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::OutOfRangeInput { .. }
                | Self::UnknownMetric(_)
                | Self::UnknownTask(_)
                | Self::Configuration(_)
                | Self::ConfigParse { .. }
                | Self::DivisionByZero { .. }
        )
    }

    /// Suggested process exit code
    pub fn exit_code(&self) -> u8 {
        if !self.is_user_fixable() {
            return 1;
        }
        match self {
            Self::Configuration(_) | Self::ConfigParse { .. } | Self::DivisionByZero { .. } => 3,
            _ => 2,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, MetricsError>;

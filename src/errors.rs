//! Shared error types for the engine and its front end

use std::path::PathBuf;
use thiserror::Error;

use crate::filter::{FilterId, FilterOperator};

/// Main error type for asterism operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// A filter could not be parsed or carries a bad threshold
    #[error("Invalid filter '{input}': {reason}")]
    InvalidFilter { input: String, reason: String },

    /// Operator is not offered for the facet at its current value count
    #[error("Operator '{operator}' is not available for facet '{facet}' with {value_count} selected value(s)")]
    InvalidOperator {
        facet: String,
        operator: FilterOperator,
        value_count: usize,
    },

    /// No filter with this id in the active filter list
    #[error("Unknown filter: {0}")]
    UnknownFilter(FilterId),

    /// Facet name not present in the record's facet table
    #[error("Unknown facet: {0}")]
    UnknownFacet(String),

    /// Sort field name not present in the record's sort table
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    /// Repository write with an id that is already stored
    #[error("Record '{0}' already exists")]
    DuplicateRecord(String),

    /// Dataset loading errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error without a file path
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error tied to a config file
    pub fn configuration_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a filter parse error
    pub fn invalid_filter(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFilter {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Whether the user can fix this error by changing their input
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. }
                | Self::InvalidFilter { .. }
                | Self::InvalidOperator { .. }
                | Self::UnknownFacet(_)
                | Self::UnknownSortField(_)
                | Self::Dataset(_)
        )
    }

    /// Process exit status: 2 for input the user can correct, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.is_user_fixable() {
            2
        } else {
            1
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

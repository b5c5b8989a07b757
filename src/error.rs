//! Error types for tablesift
//!
//! Search execution itself is infallible at this layer: malformed filter
//! syntax becomes a search term, unknown filter names are no-ops, and
//! storage failures surface when the host materializes the collection.
//! The errors here all belong to dashboard configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for tablesift operations
#[derive(Debug, Error)]
pub enum Error {
    // ==========================================================================
    // Dashboard Loading Errors
    // ==========================================================================
    #[error("Failed to read dashboard '{path}': {source}")]
    DashboardRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dashboard YAML: {message}")]
    YamlParse { message: String },

    #[error("Failed to parse dashboard JSON: {message}")]
    JsonParse { message: String },

    // ==========================================================================
    // Dashboard Validation Errors
    // ==========================================================================
    #[error("Duplicate attribute '{name}' in dashboard '{dashboard}'")]
    DuplicateAttribute { dashboard: String, name: String },

    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier {
        value: String,
        reason: &'static str,
    },
}

/// Result type alias for tablesift operations
pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// Conversions from external error types
// =============================================================================

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::YamlParse {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::JsonParse {
            message: err.to_string(),
        }
    }
}

//! Internal error types for inference operations.
//!
//! These errors are internal to `pigment-hf` and are mapped to core port
//! errors at the boundary.

use pigment_core::GenerateError;
use thiserror::Error;

/// Result type alias for inference operations.
pub type HfResult<T> = Result<T, HfError>;

/// Errors related to inference API operations.
#[derive(Debug, Error)]
pub enum HfError {
    /// The configured endpoint is not a valid URL.
    #[error("Invalid inference endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        /// The endpoint string that failed to parse
        endpoint: String,
        /// The underlying parse failure
        #[source]
        source: url::ParseError,
    },

    /// The provider rejected the call with a non-success status.
    #[error("{message}")]
    Rejected {
        /// Upstream HTTP status code
        status: u16,
        /// Composed caller-visible message
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HfError {
    /// Map to the domain-level port error.
    pub fn into_port_error(self) -> GenerateError {
        match self {
            Self::Rejected { status, message } => GenerateError::Upstream { status, message },
            err @ Self::InvalidEndpoint { .. } => GenerateError::Network {
                message: err.to_string(),
            },
            Self::Network(source) => GenerateError::Network {
                message: source.to_string(),
            },
        }
    }
}

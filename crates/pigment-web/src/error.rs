//! Caller-visible relay errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to the inbound caller.
///
/// Each variant maps to exactly one plain-text response. The taxonomy
/// stays typed internally even where the caller sees a collapsed 500,
/// so logs and tests can tell the failure kinds apart.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request body was not valid JSON.
    #[error("Invalid request body: {0}")]
    MalformedRequest(String),

    /// The prompt was absent or empty.
    #[error("Missing 'inputs' parameter")]
    MissingPrompt,

    /// The requested model alias is not in the catalog.
    #[error("Invalid model selected: {alias}")]
    UnknownModel {
        /// The alias the caller sent
        alias: String,
    },

    /// The outbound call did not complete within the deadline.
    #[error("API request timed out")]
    UpstreamTimeout,

    /// The provider rejected the request; its status is mirrored.
    #[error("{message}")]
    Upstream {
        /// Upstream HTTP status code
        status: u16,
        /// Composed upstream failure message
        message: String,
    },

    /// Catch-all for unexpected failures.
    #[error("Error: {0}")]
    Internal(String),
}

impl RelayError {
    /// The HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) | Self::MissingPrompt | Self::UnknownModel { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

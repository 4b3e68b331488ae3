//! The generation relay handler.
//!
//! Validates the inbound request, resolves the model alias, races the
//! outbound call against the configured deadline, and translates the
//! outcome into exactly one response.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use pigment_core::{GenerateError, GenerationRequest};
use tracing::{debug, info, warn};

use crate::error::RelayError;
use crate::state::AppState;

/// Handle `POST /`.
pub(crate) async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    match relay(&state, &body).await {
        Ok(response) => response,
        Err(err) => {
            warn!(%err, "Generation request failed");
            err.into_response()
        }
    }
}

/// Run one request through the full relay pipeline.
async fn relay(state: &AppState, body: &[u8]) -> Result<Response, RelayError> {
    // Parse by hand so malformed JSON maps to our own 400, not a
    // framework rejection.
    let request: GenerationRequest =
        serde_json::from_slice(body).map_err(|err| RelayError::MalformedRequest(err.to_string()))?;

    let prompt = request.prompt().ok_or(RelayError::MissingPrompt)?;

    let alias = request
        .model
        .as_deref()
        .unwrap_or_else(|| state.catalog.default_alias());
    let model_id = state
        .catalog
        .resolve(alias)
        .ok_or_else(|| RelayError::UnknownModel {
            alias: alias.to_string(),
        })?;

    info!(model = %alias, "Forwarding generation request");

    // Race the outbound call against the deadline. Losing the race drops
    // the call future, which aborts the in-flight request; winning drops
    // the timer.
    let outcome = tokio::time::timeout(state.deadline, state.generator.generate(model_id, prompt))
        .await
        .map_err(|_| RelayError::UpstreamTimeout)?;

    let image = outcome.map_err(|err| match err {
        GenerateError::Upstream { status, message } => RelayError::Upstream { status, message },
        GenerateError::Network { message } => RelayError::Internal(message),
    })?;

    debug!(bytes = image.data.len(), "Returning generated image");

    Ok(([(header::CONTENT_TYPE, image.mime)], image.data).into_response())
}

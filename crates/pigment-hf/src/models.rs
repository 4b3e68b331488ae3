//! Wire types for the inference API.
//!
//! The outbound body is intentionally minimal: the upstream contract is
//! `{"inputs": <prompt>}` and nothing else. Error bodies are parsed
//! best-effort because the API mixes JSON errors with plain-text ones.

use serde::{Deserialize, Serialize};

/// Outbound request body for the inference endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct InferenceRequest<'a> {
    /// Prompt text, forwarded verbatim.
    pub inputs: &'a str,
}

/// Error body returned by the inference API on non-success statuses.
///
/// Both fields are optional and anything unparseable collapses to the
/// default (all `None`), so a plain-text error body never fails the
/// error path itself.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct InferenceErrorBody {
    /// Human-readable error description.
    #[serde(default)]
    pub error: Option<String>,
    /// Seconds until the model is expected to be ready (cold starts).
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

impl InferenceErrorBody {
    /// Parse an error body, tolerating non-JSON and missing fields.
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Compose the caller-visible message for a rejected inference call.
///
/// Always names the upstream status; appends the upstream `error` text
/// and the estimated wait when the error body carried them.
pub(crate) fn compose_upstream_message(
    status: u16,
    reason: Option<&str>,
    body: &InferenceErrorBody,
) -> String {
    let mut message = match reason {
        Some(reason) => format!("API request failed: {status} {reason}"),
        None => format!("API request failed: {status}"),
    };
    if let Some(ref error) = body.error {
        message.push_str(&format!(", error: {error}"));
        if let Some(wait) = body.estimated_time {
            message.push_str(&format!(", estimated wait: {wait} seconds"));
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_request_serializes_exactly() {
        let body = serde_json::to_string(&InferenceRequest {
            inputs: "a red fox",
        })
        .unwrap();
        assert_eq!(body, r#"{"inputs":"a red fox"}"#);
    }

    #[test]
    fn test_parse_full_error_body() {
        let body = InferenceErrorBody::parse(br#"{"error":"loading","estimated_time":20.0}"#);
        assert_eq!(body.error.as_deref(), Some("loading"));
        assert_eq!(body.estimated_time, Some(20.0));
    }

    #[test]
    fn test_parse_tolerates_non_json() {
        let body = InferenceErrorBody::parse(b"<html>Bad Gateway</html>");
        assert!(body.error.is_none());
        assert!(body.estimated_time.is_none());
    }

    #[test]
    fn test_parse_tolerates_missing_fields() {
        let body = InferenceErrorBody::parse(br#"{"error":"rate limited"}"#);
        assert_eq!(body.error.as_deref(), Some("rate limited"));
        assert!(body.estimated_time.is_none());
    }

    #[test]
    fn test_compose_message_with_error_and_wait() {
        let body = InferenceErrorBody::parse(br#"{"error":"loading","estimated_time":20}"#);
        let message = compose_upstream_message(503, Some("Service Unavailable"), &body);
        assert!(message.contains("503"));
        assert!(message.contains("loading"));
        assert!(message.contains("20"));
        assert!(message.contains("estimated wait"));
    }

    #[test]
    fn test_compose_message_without_body_fields() {
        let message = compose_upstream_message(500, Some("Internal Server Error"), &InferenceErrorBody::default());
        assert_eq!(message, "API request failed: 500 Internal Server Error");
    }

    #[test]
    fn test_compose_message_without_reason() {
        let message = compose_upstream_message(599, None, &InferenceErrorBody::default());
        assert_eq!(message, "API request failed: 599");
    }

    #[test]
    fn test_wait_without_error_is_ignored() {
        // estimated_time only makes sense alongside an error description
        let body = InferenceErrorBody::parse(br#"{"estimated_time":5}"#);
        let message = compose_upstream_message(503, Some("Service Unavailable"), &body);
        assert!(!message.contains("estimated wait"));
    }
}

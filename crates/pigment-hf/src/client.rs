//! The inference client and its port implementation.

use async_trait::async_trait;
use pigment_core::{GenerateResult, GeneratedImage, ImageGeneratorPort};
use tracing::{debug, warn};
use url::Url;

use crate::config::HfInferenceConfig;
use crate::error::{HfError, HfResult};
use crate::models::{InferenceErrorBody, InferenceRequest, compose_upstream_message};
use crate::url::build_inference_url;

/// Success responses are returned with this content type, matching the
/// upstream image endpoints.
const IMAGE_MIME: &str = "image/png";

/// Client for the hosted inference API.
///
/// Performs exactly one attempt per call: the relay surfaces upstream
/// failures directly instead of retrying, and the caller owns the
/// deadline. Dropping an in-flight call aborts the underlying request.
#[derive(Debug)]
pub struct HfInferenceClient {
    http: reqwest::Client,
    endpoint: Url,
    token: String,
}

impl HfInferenceClient {
    /// Create a new client from the given configuration.
    pub fn new(config: &HfInferenceConfig) -> HfResult<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|source| HfError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            token: config.token.clone(),
        })
    }

    /// Issue the inference call and read the full binary response.
    async fn request_image(&self, model_id: &str, prompt: &str) -> HfResult<GeneratedImage> {
        let url = build_inference_url(&self.endpoint, model_id);
        debug!(%url, "Dispatching inference request");

        let response = self
            .http
            .post(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&InferenceRequest { inputs: prompt })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let parsed = InferenceErrorBody::parse(&body);
            let message =
                compose_upstream_message(status.as_u16(), status.canonical_reason(), &parsed);
            warn!(status = status.as_u16(), "Inference request rejected");
            return Err(HfError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let data = response.bytes().await?.to_vec();
        debug!(bytes = data.len(), "Inference request succeeded");

        Ok(GeneratedImage {
            data,
            mime: IMAGE_MIME.to_string(),
        })
    }
}

#[async_trait]
impl ImageGeneratorPort for HfInferenceClient {
    async fn generate(&self, model_id: &str, prompt: &str) -> GenerateResult<GeneratedImage> {
        self.request_image(model_id, prompt)
            .await
            .map_err(HfError::into_port_error)
    }
}

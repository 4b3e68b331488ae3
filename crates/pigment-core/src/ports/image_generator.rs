//! Image-generation port trait.

use async_trait::async_trait;
use thiserror::Error;

/// A generated image as returned by the provider.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// Raw image bytes, returned to the caller untouched.
    pub data: Vec<u8>,
    /// Content type of `data`.
    pub mime: String,
}

/// Errors from image-generation port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The provider answered with a non-success status. The message is
    /// already composed for the caller; the status is mirrored.
    #[error("{message}")]
    Upstream {
        /// Upstream HTTP status code
        status: u16,
        /// Caller-visible description of the failure
        message: String,
    },

    /// The call failed before a provider verdict was available.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },
}

/// Result type alias for image-generation port operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Port trait for hosted image-generation providers.
///
/// This trait defines the interface the relay uses to reach a provider.
/// The implementation lives in `pigment-hf`.
///
/// # Design
///
/// - Takes the resolved upstream model identifier, never a public alias
/// - Returns `GenerateError` for all failures
/// - Deadline enforcement belongs to the caller: implementations run a
///   single attempt to completion and must be cancel-safe when dropped
#[async_trait]
pub trait ImageGeneratorPort: Send + Sync {
    /// Generate one image for `prompt` with the model identified by
    /// `model_id`.
    async fn generate(&self, model_id: &str, prompt: &str) -> GenerateResult<GeneratedImage>;
}

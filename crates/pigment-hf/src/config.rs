//! Public configuration for the inference client.

/// Default base URL for the hosted inference endpoint.
pub const DEFAULT_INFERENCE_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

/// Configuration for the inference client.
///
/// The credential is the only required value; everything else has a
/// working default. Use the builder pattern methods to customize.
///
/// # Example
///
/// ```
/// use pigment_hf::HfInferenceConfig;
///
/// let config = HfInferenceConfig::new("hf_secret")
///     .with_endpoint("https://inference.example/models");
/// ```
#[derive(Debug, Clone)]
pub struct HfInferenceConfig {
    /// Base URL for the inference API
    pub(crate) endpoint: String,
    /// Bearer credential sent with every outbound call
    pub(crate) token: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl HfInferenceConfig {
    /// Create a configuration with the given credential and defaults
    /// for everything else.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_INFERENCE_ENDPOINT.to_string(),
            token: token.into(),
            user_agent: concat!("pigment-hf/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the base URL for the inference API.
    ///
    /// Defaults to [`DEFAULT_INFERENCE_ENDPOINT`].
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HfInferenceConfig::new("hf_secret");
        assert_eq!(config.endpoint, DEFAULT_INFERENCE_ENDPOINT);
        assert_eq!(config.token, "hf_secret");
        assert!(config.user_agent.contains("pigment-hf"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = HfInferenceConfig::new("tok")
            .with_endpoint("https://custom.api/models")
            .with_user_agent("test-agent");

        assert_eq!(config.endpoint, "https://custom.api/models");
        assert_eq!(config.user_agent, "test-agent");
    }
}

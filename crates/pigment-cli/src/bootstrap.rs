//! CLI bootstrap - the composition root.
//!
//! The only place concrete adapters are instantiated: the catalog is
//! built and validated, the inference client is constructed, and both
//! are handed to the web server as shared state.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use pigment_core::{ImageGeneratorPort, ModelCatalog};
use pigment_hf::{HfInferenceClient, HfInferenceConfig};

use crate::commands::ServeArgs;

/// Fully composed context for the serve command.
pub struct ServeContext {
    /// Alias table, with the configured default applied.
    pub catalog: Arc<ModelCatalog>,
    /// Outbound image-generation port.
    pub generator: Arc<dyn ImageGeneratorPort>,
    /// Deadline for a single outbound call.
    pub deadline: Duration,
}

impl std::fmt::Debug for ServeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServeContext")
            .field("catalog", &self.catalog)
            .field("generator", &"<dyn ImageGeneratorPort>")
            .field("deadline", &self.deadline)
            .finish()
    }
}

/// Compose the serve context from parsed arguments.
///
/// Fails fast on configuration the server could not honor: a default
/// model outside the catalog, or an unparseable endpoint.
pub fn bootstrap(args: &ServeArgs) -> Result<ServeContext> {
    let catalog = ModelCatalog::builtin()
        .with_default_alias(&args.default_model)
        .context("invalid --default-model")?;

    let config = HfInferenceConfig::new(&args.token).with_endpoint(&args.endpoint);
    let client = HfInferenceClient::new(&config).context("failed to build the inference client")?;

    Ok(ServeContext {
        catalog: Arc::new(catalog),
        generator: Arc::new(client),
        deadline: Duration::from_secs(args.timeout_secs),
    })
}

//! Shared application state for the relay server.

use std::sync::Arc;
use std::time::Duration;

use pigment_core::{ImageGeneratorPort, ModelCatalog};

/// Read-only state handed to every handler.
///
/// Nothing here is mutable after startup; requests share it without
/// coordination.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Outbound image-generation port.
    pub generator: Arc<dyn ImageGeneratorPort>,
    /// Alias table for resolving requested models.
    pub catalog: Arc<ModelCatalog>,
    /// Deadline for a single outbound call.
    pub deadline: Duration,
    /// UI page, rendered once at startup.
    pub page: Arc<str>,
}

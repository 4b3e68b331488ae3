//! Inbound generation-request wire type.

use serde::Deserialize;

/// A generation request as sent by the browser client.
///
/// Field names match the inbound JSON contract: `inputs` carries the
/// prompt, `model` optionally names a catalog alias. Presence and
/// emptiness of the prompt are validated by the caller via [`prompt`],
/// not during deserialization, so an absent prompt is reported as a
/// missing parameter rather than a parse failure.
///
/// [`prompt`]: GenerationRequest::prompt
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    /// Prompt text forwarded verbatim to the model.
    #[serde(default)]
    pub inputs: Option<String>,
    /// Catalog alias of the model to use; the catalog default when absent.
    #[serde(default)]
    pub model: Option<String>,
}

impl GenerationRequest {
    /// The trimmed prompt, or `None` when absent or effectively empty.
    pub fn prompt(&self) -> Option<&str> {
        self.inputs
            .as_deref()
            .map(str::trim)
            .filter(|prompt| !prompt.is_empty())
    }
}

//! URL construction for the inference endpoint.
//!
//! Pure helpers, kept separate so the path handling for model
//! identifiers containing `/` stays testable without a client.

use url::Url;

/// Build the inference URL for a resolved model identifier.
///
/// Model identifiers are `owner/name` pairs; the slash is a real path
/// separator in the upstream route and must not be encoded away.
pub(crate) fn build_inference_url(endpoint: &Url, model_id: &str) -> Url {
    let mut url = endpoint.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{model_id}"));
    url
}

//! Hugging Face Inference API adapter for pigment.
//!
//! Implements the core `ImageGeneratorPort` against the hosted inference
//! endpoint: injects the bearer credential, posts the prompt as JSON, and
//! translates upstream failures into port errors. Internal errors are
//! mapped to core port errors at the boundary.

mod client;
mod config;
mod error;
mod models;
mod url;

pub use client::HfInferenceClient;
pub use config::{DEFAULT_INFERENCE_ENDPOINT, HfInferenceConfig};
pub use error::{HfError, HfResult};

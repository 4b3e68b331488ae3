//! Port definitions: the interfaces adapters implement for the core.

mod image_generator;

pub use image_generator::{GenerateError, GenerateResult, GeneratedImage, ImageGeneratorPort};

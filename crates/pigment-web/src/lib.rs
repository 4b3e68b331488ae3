//! Axum web adapter for pigment.
//!
//! Hosts the single relay endpoint (`POST /`) and serves the bundled UI
//! page for every other request. Upstream access goes through the core
//! `ImageGeneratorPort`; this crate never talks to the provider directly.

mod error;
mod page;
mod relay;
mod server;
mod state;

#[cfg(test)]
mod testing;

pub use error::RelayError;
pub use server::serve;

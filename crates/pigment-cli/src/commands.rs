//! Subcommand and argument definitions.

use clap::{Args, Subcommand};

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the relay server and bundled UI
    Serve(ServeArgs),

    /// List the model aliases the relay accepts
    Models,
}

/// Arguments for `pigment serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short = 'p', long, default_value_t = 3000)]
    pub port: u16,

    /// API token used to authenticate outbound inference calls
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Seconds to wait for the provider before giving up
    #[arg(long, default_value_t = 300)]
    pub timeout_secs: u64,

    /// Catalog alias used when a request names no model
    #[arg(long, default_value = pigment_core::DEFAULT_MODEL_ALIAS)]
    pub default_model: String,

    /// Inference endpoint base URL
    #[arg(long, default_value = pigment_hf::DEFAULT_INFERENCE_ENDPOINT)]
    pub endpoint: String,
}

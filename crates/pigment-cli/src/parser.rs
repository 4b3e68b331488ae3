//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the image-generation relay.
#[derive(Parser)]
#[command(name = "pigment")]
#[command(about = "Relay image-generation requests to hosted models")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

//! CLI entry point - the composition root lives behind this dispatch.
//!
//! Command handlers receive parsed arguments and delegate to bootstrap
//! for wiring; no adapter is constructed anywhere else.

use clap::Parser;

use pigment_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        pigment_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve(args) => handlers::serve::execute(args).await?,
        Commands::Models => handlers::models::execute(),
    }

    Ok(())
}

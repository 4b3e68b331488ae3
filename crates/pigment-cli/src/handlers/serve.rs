//! Handler for the `serve` command.

use anyhow::Result;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::bootstrap;
use crate::commands::ServeArgs;

/// Bind the listener, wire the adapters, and run until Ctrl+C.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let ctx = bootstrap::bootstrap(&args)?;

    let listener = TcpListener::bind((args.host.as_str(), args.port)).await?;

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            shutdown.cancel();
        }
    });

    pigment_web::serve(listener, ctx.deadline, ctx.catalog, ctx.generator, cancel).await
}

//! Router construction and the serve loop.
//!
//! The inbound surface is deliberately small: `POST /` is the relay,
//! and every other method or path receives the UI page. The serve
//! function runs on a pre-bound listener until the cancellation token
//! is triggered.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::post;
use pigment_core::{ImageGeneratorPort, ModelCatalog};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::page;
use crate::relay;
use crate::state::AppState;

/// Run the relay server with a pre-bound listener.
///
/// Runs until `cancel` is triggered, then shuts down gracefully.
///
/// # Arguments
///
/// * `listener` - Pre-bound TCP listener
/// * `deadline` - Maximum wait for a single outbound inference call
/// * `catalog` - Alias table; also drives the UI's model selector
/// * `generator` - Outbound image-generation port
/// * `cancel` - Cancellation token for graceful shutdown
pub async fn serve(
    listener: TcpListener,
    deadline: Duration,
    catalog: Arc<ModelCatalog>,
    generator: Arc<dyn ImageGeneratorPort>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!("Relay server starting on {addr}");

    let state = AppState {
        generator,
        page: Arc::from(page::render_page(&catalog)),
        catalog,
        deadline,
    };

    let app = router(state);

    info!("Relay listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    info!("Relay server shut down");
    Ok(())
}

/// Build the router: the relay POST on `/`, the UI everywhere else.
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(relay::generate).fallback(page::index))
        .fallback(page::index)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

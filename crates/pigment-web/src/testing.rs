//! Test doubles and request helpers shared by the handler tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use pigment_core::{
    GenerateError, GenerateResult, GeneratedImage, ImageGeneratorPort, ModelCatalog,
};
use tower::ServiceExt;

use crate::page;
use crate::server::router;
use crate::state::AppState;

/// Scripted behavior for [`FakeGenerator`].
pub(crate) enum FakeOutcome {
    /// Succeed with these bytes.
    Image(Vec<u8>),
    /// Fail with a mirrored upstream status and message.
    Upstream(u16, String),
    /// Fail before an upstream verdict.
    Network(String),
    /// Never complete within any test deadline.
    Hang,
}

impl FakeOutcome {
    pub fn image(data: &[u8]) -> Self {
        Self::Image(data.to_vec())
    }

    pub fn upstream(status: u16, message: &str) -> Self {
        Self::Upstream(status, message.to_string())
    }

    pub fn network(message: &str) -> Self {
        Self::Network(message.to_string())
    }
}

/// In-test generator double that records every call it receives.
pub(crate) struct FakeGenerator {
    outcome: FakeOutcome,
    calls: AtomicUsize,
    finished: AtomicBool,
    seen: Mutex<Vec<(String, String)>>,
}

impl FakeGenerator {
    pub fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            finished: AtomicBool::new(false),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// How many calls reached the port.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Whether any call ran to completion (false after cancellation).
    pub fn finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    /// The `(model_id, prompt)` pairs received, in order.
    pub fn seen(&self) -> Vec<(String, String)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGeneratorPort for FakeGenerator {
    async fn generate(&self, model_id: &str, prompt: &str) -> GenerateResult<GeneratedImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((model_id.to_string(), prompt.to_string()));

        if matches!(self.outcome, FakeOutcome::Hang) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        self.finished.store(true, Ordering::SeqCst);

        match &self.outcome {
            FakeOutcome::Image(data) => Ok(GeneratedImage {
                data: data.clone(),
                mime: "image/png".to_string(),
            }),
            FakeOutcome::Upstream(status, message) => Err(GenerateError::Upstream {
                status: *status,
                message: message.clone(),
            }),
            FakeOutcome::Network(message) => Err(GenerateError::Network {
                message: message.clone(),
            }),
            FakeOutcome::Hang => Err(GenerateError::Network {
                message: "hang outlived the test deadline".to_string(),
            }),
        }
    }
}

/// State wired to the built-in catalog with a generous test deadline.
pub(crate) fn test_state(fake: &Arc<FakeGenerator>) -> AppState {
    let catalog = Arc::new(ModelCatalog::builtin());
    AppState {
        generator: fake.clone(),
        page: Arc::from(page::render_page(&catalog)),
        catalog,
        deadline: Duration::from_secs(5),
    }
}

impl AppState {
    /// Override the outbound deadline for timeout tests.
    pub(crate) fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }
}

/// Drive one request through a fresh router.
pub(crate) async fn send(state: AppState, request: Request<Body>) -> Response<Body> {
    router(state).oneshot(request).await.unwrap()
}

/// POST a raw JSON body to the relay path.
pub(crate) async fn post_json(state: AppState, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(state, request).await
}

/// Read a full response body as UTF-8 text.
pub(crate) async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

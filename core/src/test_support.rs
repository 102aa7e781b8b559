//! In-process provider double used by the client and suggestion tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;

/// Canned reply the stub returns for every request it receives.
#[derive(Clone)]
pub(crate) struct StubReply {
    pub status: StatusCode,
    pub body: String,
}

/// Request bodies the stub has seen, in arrival order.
pub(crate) type RecordedBodies = Arc<Mutex<Vec<String>>>;

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    bodies: RecordedBodies,
    delay: Option<Duration>,
}

/// Starts a provider double on an OS-assigned local port. Returns the bound
/// address and a handle to the recorded request bodies.
pub(crate) async fn spawn_stub_provider(reply: StubReply) -> (SocketAddr, RecordedBodies) {
    spawn_inner(reply, None).await
}

/// Like [`spawn_stub_provider`], but the stub sleeps before answering so
/// client-side timeouts can be exercised.
pub(crate) async fn spawn_stub_provider_with_delay(
    reply: StubReply,
    delay: Duration,
) -> (SocketAddr, RecordedBodies) {
    spawn_inner(reply, Some(delay)).await
}

async fn spawn_inner(reply: StubReply, delay: Option<Duration>) -> (SocketAddr, RecordedBodies) {
    let bodies: RecordedBodies = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        reply,
        bodies: Arc::clone(&bodies),
        delay,
    };

    // The generateContent path carries a colon inside its final segment,
    // which a route pattern cannot express; answer every path instead.
    let app = Router::new().fallback(handle).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, bodies)
}

async fn handle(State(state): State<StubState>, body: Bytes) -> impl IntoResponse {
    state
        .bodies
        .lock()
        .unwrap()
        .push(String::from_utf8_lossy(&body).into_owned());

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.reply.status,
        [("content-type", "application/json")],
        state.reply.body.clone(),
    )
}

/// A minimal successful generateContent body carrying one text part.
pub(crate) fn gemini_text_envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

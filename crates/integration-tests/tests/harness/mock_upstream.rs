//! Mock Together AI backend for integration tests
//!
//! Serves `/v1/chat/completions` with a canned reply and records what it
//! received, so tests can assert both directions of the wire.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use futures_util::{StreamExt, stream};
use tokio_util::sync::CancellationToken;

/// What the mock answers to every chat completion request
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with this JSON body
    Json(serde_json::Value),
    /// 200 with a body that is not JSON
    Text(String),
    /// Given status with a plain-text body
    Status(u16, String),
    /// 200 `text/event-stream`, each element written as a separate body chunk
    Sse(Vec<String>),
}

/// Request as seen by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// Mock upstream bound to an ephemeral local port
pub struct MockTogether {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    reply: Reply,
    request_count: AtomicU32,
    last_request: Mutex<Option<RecordedRequest>>,
}

impl MockTogether {
    /// Start the mock server, returning immediately
    pub async fn start(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            reply,
            request_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Mock answering with a single non-streaming completion
    pub async fn completion(content: &str) -> anyhow::Result<Self> {
        Self::start(Reply::Json(completion_body(content))).await
    }

    /// Mock streaming the given SSE lines, one body chunk each
    pub async fn sse<I, S>(lines: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::start(Reply::Sse(lines.into_iter().map(Into::into).collect())).await
    }

    /// Base URL for configuring the mock as the Together upstream
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of chat completion requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Most recent request received
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockTogether {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Non-streaming completion body in the upstream's shape
pub fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "deepseek-ai/DeepSeek-V3",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}

/// One SSE line carrying a content delta
pub fn delta_line(content: &str) -> String {
    let chunk = serde_json::json!({
        "id": "chatcmpl-test-stream",
        "object": "chat.completion.chunk",
        "choices": [{"index": 0, "delta": {"content": content}}]
    });
    format!("data: {chunk}\n")
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    *state.last_request.lock().unwrap() = Some(RecordedRequest {
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    });

    match &state.reply {
        Reply::Json(value) => Json(value.clone()).into_response(),
        Reply::Text(text) => text.clone().into_response(),
        Reply::Status(code, text) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, text.clone()).into_response()
        }
        Reply::Sse(lines) => {
            // Pause between chunks so each one reaches the client as its own read
            let chunks = stream::iter(lines.clone()).then(|line| async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                Ok::<_, Infallible>(line)
            });

            ([(header::CONTENT_TYPE, "text/event-stream")], Body::from_stream(chunks)).into_response()
        }
    }
}

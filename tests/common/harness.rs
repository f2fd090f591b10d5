//! Test server harness.
//!
//! Two servers per test: a fake chat-completion upstream that records what it receives, and
//! the oracle itself wired to that upstream through a real [`OpenAiJudge`].

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::post,
};
use oracle::gateway::{HandlerState, create_router_with_state};
use oracle::judge::OpenAiJudge;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const TEST_API_KEY: &str = "oracle-test-key";
pub const TEST_UPSTREAM_KEY: &str = "sk-upstream-test";

/// What the fake upstream answers with.
#[derive(Debug, Clone)]
pub enum UpstreamReply {
    /// 200 with a chat completion whose first choice carries this content.
    Completion(String),
    /// 200 with a completion that has no choices.
    NoChoices,
    /// Arbitrary status and raw body.
    Raw(u16, String),
}

/// A request the fake upstream received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct UpstreamState {
    reply: UpstreamReply,
    received: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test123",
        "object": "chat.completion",
        "created": 1702512000_u32,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 120,
            "completion_tokens": 60,
            "total_tokens": 180
        }
    })
}

async fn fake_chat_completions(
    State(state): State<UpstreamState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state
        .received
        .lock()
        .unwrap()
        .push(RecordedRequest {
            authorization,
            body,
        });

    match state.reply {
        UpstreamReply::Completion(content) => Json(completion_body(&content)).into_response(),
        UpstreamReply::NoChoices => {
            let mut body = completion_body("");
            body["choices"] = json!([]);
            Json(body).into_response()
        }
        UpstreamReply::Raw(status, body) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response(),
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve(app: Router) -> std::io::Result<TestServer> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .ok();
    });

    Ok(TestServer {
        addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

pub struct FakeUpstream {
    server: TestServer,
    received: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeUpstream {
    /// API root to hand to [`OpenAiJudge::new`].
    pub fn base_url(&self) -> String {
        format!("{}/v1", self.server.url())
    }

    pub fn received(&self) -> Vec<RecordedRequest> {
        self.received.lock().unwrap().clone()
    }
}

pub async fn spawn_fake_upstream(reply: UpstreamReply) -> std::io::Result<FakeUpstream> {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = UpstreamState {
        reply,
        received: received.clone(),
    };

    let app = Router::new()
        .route("/v1/chat/completions", post(fake_chat_completions))
        .with_state(state);

    Ok(FakeUpstream {
        server: serve(app).await?,
        received,
    })
}

/// Oracle server backed by a real [`OpenAiJudge`] pointed at `upstream`.
pub async fn spawn_oracle(upstream: &FakeUpstream) -> std::io::Result<TestServer> {
    let judge = OpenAiJudge::new(TEST_UPSTREAM_KEY, &upstream.base_url());
    let app = create_router_with_state(HandlerState::new(judge, TEST_API_KEY));
    serve(app).await
}

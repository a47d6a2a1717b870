#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// A request received by the stub backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Clone)]
struct CannedResponse {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

#[derive(Clone, Default)]
struct StubState {
    responses: Arc<Mutex<HashMap<(String, String), CannedResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// HTTP backend on an ephemeral local port answering canned responses.
///
/// Unknown routes answer 404 with `{"detail": "Not Found"}`, like the real
/// backend.
pub struct StubBackend {
    addr: std::net::SocketAddr,
    state: StubState,
}

impl StubBackend {
    pub async fn start() -> Self {
        let state = StubState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    /// Base URL including the `/api/v1` prefix.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    /// Answer `method path` (path relative to `/api/v1`) with `status` and a
    /// JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: serde_json::Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.insert(method, path, status, body, None);
    }

    /// Like [`StubBackend::respond`] but only after `delay`.
    pub fn respond_slowly(
        &self,
        method: &str,
        path: &str,
        delay: Duration,
        body: serde_json::Value,
    ) {
        self.insert(method, path, 200, &body.to_string(), Some(delay));
    }

    fn insert(&self, method: &str, path: &str, status: u16, body: &str, delay: Option<Duration>) {
        self.state.responses.lock().unwrap().insert(
            (method.to_uppercase(), format!("/api/v1{}", path)),
            CannedResponse {
                status,
                body: body.to_string(),
                delay,
            },
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        let full = format!("/api/v1{}", path);
        self.requests()
            .into_iter()
            .filter(|r| r.path == full)
            .collect()
    }
}

async fn handle(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    let canned = state
        .responses
        .lock()
        .unwrap()
        .get(&(method.to_string(), uri.path().to_string()))
        .cloned();

    let canned = canned.unwrap_or(CannedResponse {
        status: 404,
        body: r#"{"detail": "Not Found"}"#.to_string(),
        delay: None,
    });

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    (
        StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
}

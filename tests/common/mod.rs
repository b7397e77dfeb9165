//! Shared utilities for integration tests: an in-process JSON-RPC node.

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

type Handler = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

struct Method {
    handler: Handler,
    delay: Option<Duration>,
}

#[derive(Default)]
struct Inner {
    methods: HashMap<String, Method>,
    requests: Mutex<Vec<String>>,
}

/// Programmable mock node. Unregistered methods answer with a JSON-RPC
/// "method not found" error.
#[derive(Default)]
pub struct MockNode {
    inner: Inner,
}

/// Handle to a running mock node.
#[derive(Clone)]
pub struct RunningNode {
    pub url: String,
    inner: Arc<Inner>,
}

#[allow(dead_code)]
impl MockNode {
    /// Node that answers `eth_chainId` with `chain_id`.
    pub fn new(chain_id: u64) -> Self {
        Self::default().with_result("eth_chainId", json!(format!("0x{:x}", chain_id)))
    }

    /// Fixed result for `method`.
    pub fn with_result(self, method: &str, result: Value) -> Self {
        self.with_handler(method, move |_| result.clone())
    }

    /// Result computed from the request params.
    pub fn with_handler<F>(mut self, method: &str, f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.inner.methods.insert(
            method.to_string(),
            Method {
                handler: Arc::new(f),
                delay: None,
            },
        );
        self
    }

    /// Fixed result for `method`, sent after `delay`.
    pub fn with_slow_result(mut self, method: &str, result: Value, delay: Duration) -> Self {
        self = self.with_result(method, result);
        if let Some(m) = self.inner.methods.get_mut(method) {
            m.delay = Some(delay);
        }
        self
    }

    /// Bind to an ephemeral port and serve in the background.
    pub async fn start(self) -> RunningNode {
        let inner = Arc::new(self.inner);
        let app = Router::new()
            .route("/", post(handle))
            .with_state(inner.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningNode {
            url: format!("http://{}", addr),
            inner,
        }
    }
}

#[allow(dead_code)]
impl RunningNode {
    /// Methods received so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.inner.requests.lock().unwrap().clone()
    }

    /// Number of requests received for `method`.
    pub fn count(&self, method: &str) -> usize {
        self.requests().iter().filter(|m| m.as_str() == method).count()
    }
}

async fn handle(State(inner): State<Arc<Inner>>, Json(body): Json<Value>) -> Json<Value> {
    match body {
        Value::Array(batch) => {
            let mut responses = Vec::with_capacity(batch.len());
            for request in &batch {
                responses.push(respond(&inner, request).await);
            }
            Json(Value::Array(responses))
        }
        request => Json(respond(&inner, &request).await),
    }
}

async fn respond(inner: &Inner, request: &Value) -> Value {
    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let method = request
        .get("method")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let params = request.get("params").cloned().unwrap_or(Value::Null);

    inner.requests.lock().unwrap().push(method.clone());

    match inner.methods.get(&method) {
        Some(m) => {
            if let Some(delay) = m.delay {
                tokio::time::sleep(delay).await;
            }
            json!({ "jsonrpc": "2.0", "id": id, "result": (m.handler)(&params) })
        }
        None => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32601, "message": format!("method {} not found", method) }
        }),
    }
}

//! In-memory transport for tests
//!
//! Responses are registered per method + path. Each route holds a queue:
//! calls pop responses front to back and the last ungated response stays
//! as the answer for every further call. A gated response blocks the
//! calling task until the test releases its [`Notify`], which lets tests
//! control the completion order of concurrent requests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use crate::error::Result;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

#[derive(Clone)]
struct MockResponse {
    status: u16,
    body: String,
    retry_after: Option<u64>,
    gate: Option<Arc<Notify>>,
}

type RouteKey = (Method, String);

/// Scriptable [`Transport`].
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<RouteKey, VecDeque<MockResponse>>>,
    calls: Mutex<Vec<ApiRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Method, path: &str, response: MockResponse) {
        lock(&self.routes)
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
    }

    /// Queue a response with an arbitrary status and raw body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: impl Into<String>) {
        self.push(
            method,
            path,
            MockResponse {
                status,
                body: body.into(),
                retry_after: None,
                gate: None,
            },
        );
    }

    /// Queue a `200` JSON response.
    pub fn respond_json(&self, method: Method, path: &str, body: &Value) {
        self.respond(method, path, 200, body.to_string());
    }

    /// Queue a `429` with an optional `Retry-After`.
    pub fn respond_rate_limited(&self, method: Method, path: &str, retry_after: Option<u64>) {
        self.push(
            method,
            path,
            MockResponse {
                status: 429,
                body: r#"{"message":"Too Many Attempts."}"#.to_string(),
                retry_after,
                gate: None,
            },
        );
    }

    /// Queue a `200` JSON response that is held until the returned gate is notified.
    pub fn respond_json_gated(&self, method: Method, path: &str, body: &Value) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.push(
            method,
            path,
            MockResponse {
                status: 200,
                body: body.to_string(),
                retry_after: None,
                gate: Some(gate.clone()),
            },
        );
        gate
    }

    /// Every request seen so far, in arrival order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        lock(&self.calls).clone()
    }

    /// Number of requests seen for `method path`.
    pub fn call_count(&self, method: Method, path: &str) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn next_response(&self, key: &RouteKey) -> Option<MockResponse> {
        let mut routes = lock(&self.routes);
        let queue = routes.get_mut(key)?;
        let sticky = queue.len() == 1 && queue.front().is_some_and(|r| r.gate.is_none());
        if sticky {
            queue.front().cloned()
        } else {
            queue.pop_front()
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        lock(&self.calls).push(request.clone());

        let key = (request.method, request.path.clone());
        let Some(response) = self.next_response(&key) else {
            log::debug!("[mock] no route for {} {}", request.method, request.path);
            return Ok(ApiResponse {
                status: 404,
                body: r#"{"message":"Not Found"}"#.to_string(),
                retry_after: None,
            });
        };

        if let Some(gate) = &response.gate {
            gate.notified().await;
        }

        Ok(ApiResponse {
            status: response.status,
            body: response.body,
            retry_after: response.retry_after,
        })
    }
}

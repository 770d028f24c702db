//! Transport abstraction
//!
//! [`ForgeClient`](crate::ForgeClient) never talks to reqwest directly: it hands an
//! [`ApiRequest`] to a [`Transport`] and receives the raw [`ApiResponse`].
//! Status-code interpretation stays in the client so every transport
//! (real HTTP, test doubles) gets the same error mapping.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// HTTP method subset used by the Forge API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path starting with `/`, e.g. `/servers/1/sites`.
    pub path: String,
    /// JSON body, if any.
    pub body: Option<Value>,
}

/// Raw response as seen by the client before status mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
    /// Parsed `Retry-After` header (seconds).
    pub retry_after: Option<u64>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the Forge API.
///
/// Implementations must be safe to call concurrently; the client is shared
/// read-only by every in-flight task.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request. Only transport-level failures are errors here;
    /// any HTTP status is returned as an `Ok` response.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

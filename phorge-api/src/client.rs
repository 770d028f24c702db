//! Forge API client
//!
//! Thin typed layer over a [`Transport`]: status mapping, JSON decoding and
//! envelope extraction. Per-resource operations live in [`crate::endpoints`]
//! as further `impl ForgeClient` blocks.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ForgeError, Result};
use crate::http_client::HttpTransport;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::utils::log_sanitizer::truncate_for_log;

/// Async client for the Forge API.
///
/// Cloning is cheap; every clone shares the same transport.
#[derive(Clone)]
pub struct ForgeClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ForgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForgeClient").finish_non_exhaustive()
    }
}

impl ForgeClient {
    /// Client for the production API authenticated with `api_key`.
    pub fn new(api_key: &str) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(api_key)?)))
    }

    /// Client over an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    // ===== Raw verbs =====

    /// `GET` returning the decoded JSON body (`{}` when empty).
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self.request(Method::Get, path, None).await?;
        parse_body(&response)
    }

    /// `GET` returning the body as plain text (deployment script, `.env`).
    pub async fn get_text(&self, path: &str) -> Result<String> {
        Ok(self.request(Method::Get, path, None).await?.body)
    }

    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<Value> {
        let response = self.request(Method::Post, path, body).await?;
        parse_body(&response)
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<Value> {
        let response = self.request(Method::Put, path, Some(body)).await?;
        parse_body(&response)
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        let response = self.request(Method::Delete, path, None).await?;
        parse_body(&response)
    }

    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<ApiResponse> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            body,
        };
        let response = self.transport.execute(request).await?;
        check_status(&response, path)?;
        Ok(response)
    }

    // ===== Envelope helpers =====

    /// `GET` an array wrapped as `{"<key>": [...]}`. A missing or null key is an empty list.
    pub(crate) async fn get_list<T>(&self, path: &str, key: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let value = self.get_json(path).await?;
        extract_list(value, key)
    }

    /// `GET` an object wrapped as `{"<key>": {...}}`. A missing key is a parse error.
    pub(crate) async fn get_item<T>(&self, path: &str, key: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let value = self.get_json(path).await?;
        extract_item(value, key)
    }

    /// `POST` a serializable payload and decode the `{"<key>": {...}}` answer.
    pub(crate) async fn post_item<B, T>(&self, path: &str, payload: &B, key: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.post(path, Some(to_body(payload)?)).await?;
        extract_item(value, key)
    }
}

/// Map non-2xx responses onto [`ForgeError`].
fn check_status(response: &ApiResponse, path: &str) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }

    let error = match response.status {
        401 => ForgeError::Authentication {
            message: "Invalid API key".to_string(),
        },
        404 => ForgeError::NotFound {
            path: path.to_string(),
        },
        422 => ForgeError::Validation {
            details: serde_json::from_str(&response.body).unwrap_or_else(|_| {
                let mut map = Map::new();
                map.insert("error".to_string(), Value::String(response.body.clone()));
                Value::Object(map)
            }),
        },
        429 => ForgeError::RateLimited {
            retry_after: response.retry_after,
        },
        status => ForgeError::Api {
            status,
            message: error_message(&response.body),
        },
    };

    if error.is_expected() {
        log::warn!("[forge] {path}: {error}");
    } else {
        log::error!("[forge] {path}: {error}");
    }
    Err(error)
}

/// `message` field of a JSON error body, else the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

fn parse_body(response: &ApiResponse) -> Result<Value> {
    if response.status == 204 || response.body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(&response.body).map_err(|e| {
        log::error!("[forge] JSON parse failed: {e}");
        log::error!("[forge] Raw response: {}", truncate_for_log(&response.body));
        ForgeError::Parse {
            detail: e.to_string(),
        }
    })
}

pub(crate) fn extract_list<T>(value: Value, key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let Value::Object(mut map) = value else {
        return Err(ForgeError::Parse {
            detail: format!("expected an object with '{key}'"),
        });
    };
    match map.remove(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items).map_err(|e| ForgeError::Parse {
            detail: format!("'{key}': {e}"),
        }),
    }
}

pub(crate) fn extract_item<T>(value: Value, key: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let item = match value {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    };
    let Some(item) = item.filter(|v| !v.is_null()) else {
        return Err(ForgeError::Parse {
            detail: format!("missing '{key}' in response"),
        });
    };
    serde_json::from_value(item).map_err(|e| ForgeError::Parse {
        detail: format!("'{key}': {e}"),
    })
}

pub(crate) fn to_body<B>(payload: &B) -> Result<Value>
where
    B: Serialize + ?Sized,
{
    serde_json::to_value(payload).map_err(|e| ForgeError::Serialization {
        detail: e.to_string(),
    })
}

//! reqwest-backed transport
//!
//! Holds the single long-lived `reqwest::Client` (connection pool, TLS sessions)
//! with the bearer token baked into its default headers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::{ForgeError, Result};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::utils::log_sanitizer::body_for_log;

/// Production API root.
pub const BASE_URL: &str = "https://forge.laravel.com/api/v1";

/// Total request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// TCP/TLS connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport that talks to the real API over HTTPS.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the production API.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Create a transport against a custom API root (staging, proxies).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
            ForgeError::Authentication {
                message: "API key contains invalid characters".to_string(),
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ForgeError::Network {
                detail: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let builder = self.builder(&request);
        execute_request(builder, request.method, &request.path).await
    }
}

/// Performs an HTTP request and returns the raw response
///
/// Unified processing: sending requests, logging, transport error mapping.
///
/// # Returns
/// * `Ok(ApiResponse)` - any HTTP status, including errors
/// * `Err(ForgeError::Timeout)` - total or connect timeout elapsed
/// * `Err(ForgeError::Network)` - anything else that prevented a response
async fn execute_request(
    request_builder: RequestBuilder,
    method: Method,
    path: &str,
) -> Result<ApiResponse> {
    log::debug!("[forge] {method} {path}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            ForgeError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ForgeError::Network {
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("[forge] Response Status: {status}");

    // Extract Retry-After header (before consuming response body)
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    if status == 429 {
        log::warn!("[forge] Rate limited (HTTP 429), retry_after={retry_after:?}");
    }

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            ForgeError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ForgeError::Network {
                detail: format!("Failed to read response body: {e}"),
            }
        }
    })?;

    log::debug!("[forge] Response Body: {}", body_for_log(path, &body));

    Ok(ApiResponse {
        status,
        body,
        retry_after,
    })
}

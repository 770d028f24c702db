use serde_json::Value;

/// Unified error type for every Forge API operation.
///
/// The HTTP status mapping lives in [`crate::client`]; transport failures
/// (DNS, TLS, connect/total timeouts) are produced by [`crate::transport`].
///
/// # Transient Errors
///
/// - [`Network`](Self::Network): connectivity issues
/// - [`Timeout`](Self::Timeout): the 30s total or 10s connect timeout elapsed
/// - [`RateLimited`](Self::RateLimited): HTTP 429
///
/// The client never retries on its own; retrying is left to the user.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ForgeError {
    /// The API key was rejected (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Human readable reason.
        message: String,
    },

    /// The referenced resource does not exist (HTTP 404).
    #[error("Resource not found: {path}")]
    NotFound {
        /// Request path that produced the 404.
        path: String,
    },

    /// A create/update request was rejected (HTTP 422).
    #[error("Validation failed: {}", validation_summary(.details))]
    Validation {
        /// Raw error body returned by the API.
        details: Value,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    #[error("{}", rate_limited_message(.retry_after))]
    RateLimited {
        /// Suggested wait time in seconds, from the `Retry-After` header.
        retry_after: Option<u64>,
    },

    /// Any other non-2xx response.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// `message` field of the body, or the raw body.
        message: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The response body could not be decoded.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// A request body could not be encoded.
    #[error("Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ForgeError {
    /// 是否为预期行为（凭证错误、资源不存在、表单校验失败等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. }
                | Self::NotFound { .. }
                | Self::Validation { .. }
                | Self::RateLimited { .. }
        )
    }

    /// Whether the error means the API key itself is unusable.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}

/// Flatten a 422 body into a single line.
///
/// Forge answers with either `{"errors": {"field": ["msg", ...]}}`,
/// `{"message": "..."}` or, when the body was not JSON, `{"error": "<text>"}`.
#[must_use]
pub fn validation_summary(details: &Value) -> String {
    if let Some(errors) = details.get("errors").and_then(Value::as_object) {
        let parts: Vec<String> = errors
            .iter()
            .map(|(field, messages)| {
                let text = match messages {
                    Value::Array(items) => items
                        .iter()
                        .map(|m| m.as_str().map_or_else(|| m.to_string(), str::to_string))
                        .collect::<Vec<_>>()
                        .join(", "),
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!("{field}: {text}")
            })
            .collect();
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }

    for key in ["message", "error"] {
        if let Some(text) = details.get(key).and_then(Value::as_str) {
            return text.to_string();
        }
    }

    details.to_string()
}

#[allow(clippy::ref_option)]
fn rate_limited_message(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!("Rate limit exceeded (retry after {secs}s)"),
        None => "Rate limit exceeded".to_string(),
    }
}

/// Convenience type alias for `Result<T, ForgeError>`.
pub type Result<T> = std::result::Result<T, ForgeError>;

//! Transport types
//!
//! Common types shared across transport implementations.

/// Adapter errors
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// Network error (connection refused, timeout, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP error (non-2xx status)
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limited
    #[error("Rate limited{retry_after}")]
    RateLimited { retry_after: String },

    /// Response did not carry `choices[0].message.content`
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for AdapterError {
    fn from(err: std::io::Error) -> Self {
        AdapterError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        AdapterError::Json(err.to_string())
    }
}

impl From<ureq::Error> for AdapterError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(401, _) | ureq::Error::Status(403, _) => {
                AdapterError::Authentication("Invalid API key".to_string())
            }
            ureq::Error::Status(429, response) => AdapterError::RateLimited {
                retry_after: response
                    .header("retry-after")
                    .map(|s| format!(" (retry after {}s)", s))
                    .unwrap_or_default(),
            },
            ureq::Error::Status(code, response) => AdapterError::Http {
                status: code,
                message: response.status_text().to_string(),
            },
            ureq::Error::Transport(err) => AdapterError::Network(err.to_string()),
        }
    }
}

/// Synchronous HTTP transport
///
/// Abstraction over the HTTP client so adapters can be tested with
/// FakeTransport.
pub trait SyncTransport: Send + Sync {
    /// POST JSON request and return response body
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, AdapterError>;
}

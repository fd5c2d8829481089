//! Real HTTP transport using ureq
//!
//! Synchronous blocking HTTP client for the completion endpoint.

use crate::llm::adapters::transport_types::{AdapterError, SyncTransport};
use std::io::Read;
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Real HTTP transport using ureq
#[derive(Debug)]
pub struct UreqTransport {
    /// Timeout in seconds for requests
    timeout: u64,
}

impl UreqTransport {
    /// Create transport with the given request timeout
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: timeout_secs,
        }
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout
    }
}

impl SyncTransport for UreqTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, AdapterError> {
        tracing::debug!(url, timeout_secs = self.timeout, body_len = body.len(), "POST");

        let mut request = ureq::post(url).timeout(Duration::from_secs(self.timeout));
        for (key, value) in headers {
            request = request.set(key, value);
        }

        // ureq reports 4xx/5xx as Error::Status
        let response = request.send_string(body)?;
        tracing::debug!(status = response.status(), "response received");

        let mut body = String::new();
        response.into_reader().read_to_string(&mut body)?;
        Ok(body)
    }
}

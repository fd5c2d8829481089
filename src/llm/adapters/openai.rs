//! OpenAI-compatible adapter
//!
//! Chat completions over any OpenAI-compatible endpoint (SiliconFlow by
//! default). Sampling is pinned to temperature 0 / top_p 0.

use crate::llm::adapters::transport::{SyncTransport, Transport, UreqTransport};
use crate::llm::adapters::{AdapterError, LlmAdapter};

pub use crate::llm::adapters::openai_parse::parse_chat_completion;

/// OpenAI-compatible adapter
#[derive(Debug)]
pub struct OpenAiAdapter {
    /// Base URL (e.g., https://api.siliconflow.cn/v1)
    base_url: String,
    /// Model name
    model: String,
    /// API key
    api_key: String,
    /// HTTP transport
    transport: Transport,
}

impl OpenAiAdapter {
    /// Create new adapter over the real HTTP transport
    pub fn new(base_url: String, model: String, api_key: String, timeout_secs: u64) -> Self {
        Self::with_transport(
            base_url,
            model,
            api_key,
            Transport::Real(UreqTransport::new(timeout_secs)),
        )
    }

    /// Create adapter with custom transport (for testing)
    pub fn with_transport(
        base_url: String,
        model: String,
        api_key: String,
        transport: Transport,
    ) -> Self {
        Self {
            base_url,
            model,
            api_key,
            transport,
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Completion endpoint URL
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Build chat request body
    pub fn build_request(&self, prompt: &str) -> String {
        serde_json::json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": 0,
            "top_p": 0
        })
        .to_string()
    }
}

impl LlmAdapter for OpenAiAdapter {
    fn generate(&self, prompt: &str) -> Result<String, AdapterError> {
        let url = self.endpoint();
        let body = self.build_request(prompt);

        let auth_header = format!("Bearer {}", self.api_key);
        let headers = [
            ("Authorization", auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        tracing::info!(model = %self.model, "requesting completion");
        let response = self.transport.post_json(&url, &headers, &body)?;
        let content = parse_chat_completion(&response)?;
        tracing::debug!(content_len = content.len(), "completion received");
        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

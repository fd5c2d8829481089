//! LLM Adapters
//!
//! Provider-agnostic interface for chat completion HTTP APIs.

pub mod openai;
pub mod openai_parse;
pub mod transport;
pub mod transport_fake;
pub mod transport_types;
pub mod transport_ureq;

// Re-export common types
pub use openai::OpenAiAdapter;
pub use transport::{AdapterError, SyncTransport, Transport};

/// LLM adapter trait
///
/// The translator calls the model through this uniform interface.
pub trait LlmAdapter: Send + Sync {
    /// Generate completion from prompt (non-streaming)
    ///
    /// Returns the full response text.
    fn generate(&self, prompt: &str) -> Result<String, AdapterError>;

    /// Get provider name for logging
    fn provider_name(&self) -> &str;
}

impl<A: LlmAdapter + ?Sized> LlmAdapter for &A {
    fn generate(&self, prompt: &str) -> Result<String, AdapterError> {
        (**self).generate(prompt)
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}

//! HTTP Transport for LLM Adapters
//!
//! Provides synchronous HTTP client.
//! Uses ureq for blocking I/O.

pub use crate::llm::adapters::transport_fake::FakeTransport;
pub use crate::llm::adapters::transport_types::{AdapterError, SyncTransport};
pub use crate::llm::adapters::transport_ureq::UreqTransport;

/// Concrete transport enum
///
/// Wraps all transport types so adapters hold one concrete type.
#[derive(Debug)]
pub enum Transport {
    Real(UreqTransport),
    Fake(FakeTransport),
}

impl SyncTransport for Transport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, AdapterError> {
        match self {
            Transport::Real(t) => t.post_json(url, headers, body),
            Transport::Fake(t) => t.post_json(url, headers, body),
        }
    }
}

//! LLM integration
//!
//! The model call is an external collaborator of the translation core:
//! it receives the rendered prompt and returns raw text for the
//! normalizer.

pub mod adapters;

pub use adapters::{AdapterError, LlmAdapter, OpenAiAdapter, Transport};

//! Completion provider implementations.
//!
//! Contains concrete implementations of the [`CompletionProvider`] trait
//! defined in `parlance-core`. Groq's chat completions endpoint is
//! OpenAI-compatible, so [`groq::GroqProvider`] also works against any
//! compatible server via a base URL override.
//!
//! [`CompletionProvider`]: parlance_core::llm::provider::CompletionProvider

pub mod groq;

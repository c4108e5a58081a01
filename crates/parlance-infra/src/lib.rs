//! Infrastructure layer for Parlance.
//!
//! Contains implementations of the port traits defined in `parlance-core`:
//! the JSON-file transcript store and the Groq completion provider, plus
//! the data directory and configuration loaders.

pub mod config;
pub mod llm;
pub mod store;

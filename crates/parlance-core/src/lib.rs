//! Exchange orchestration and port trait definitions for Parlance.
//!
//! This crate defines the "ports" (store and provider traits) that the
//! infrastructure layer implements. It depends only on `parlance-types` --
//! never on `parlance-infra` or any HTTP/IO crate.

pub mod exchange;
pub mod llm;
pub mod transcript;

//! Shared domain types for Parlance.
//!
//! This crate contains the core domain types used across the relay:
//! transcript messages, completion request/response shapes, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod message;

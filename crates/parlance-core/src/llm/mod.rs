//! Completion provider abstractions for Parlance.
//!
//! This module defines the `CompletionProvider` trait that the
//! infrastructure layer implements for outbound completion requests.

pub mod provider;

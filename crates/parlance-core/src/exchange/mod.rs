//! Exchange cycle orchestration for Parlance.
//!
//! This module holds the prompt assembly and the `ExchangeService` that
//! runs the user-message/assistant-reply round trip.

pub mod prompt;
pub mod service;

//! Relay configuration types for Parlance.
//!
//! `RelayConfig` represents the `config.toml` that controls the completion
//! provider: model, reply token bound, request timeout.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the relay.
///
/// Loaded from `{data_dir}/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Model requested from the completion provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on generated reply length, in tokens.
    #[serde(default = "default_max_reply_tokens")]
    pub max_reply_tokens: u32,

    /// Timeout for a single completion request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Override the provider base URL (tests, proxies).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_max_reply_tokens() -> u32 {
    300
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_reply_tokens: default_max_reply_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
            base_url: None,
        }
    }
}

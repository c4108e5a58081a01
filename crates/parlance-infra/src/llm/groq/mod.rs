//! GroqProvider -- concrete [`CompletionProvider`] implementation for Groq.
//!
//! Sends requests to the OpenAI-compatible chat completions endpoint
//! (`POST {base_url}/chat/completions`) with bearer authentication.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

pub mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use parlance_core::llm::provider::CompletionProvider;
use parlance_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use self::types::{GroqChatRequest, GroqChatResponse, GroqMessage};

/// Default Groq API base URL (OpenAI-compatible surface).
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq completion provider.
///
/// Implements [`CompletionProvider`] for the Groq chat completions API.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the Authorization header. It never appears in Debug
/// output, Display output, or tracing logs.
pub struct GroqProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GroqProvider {
    /// Create a new Groq provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Groq API key wrapped in SecretString
    /// * `timeout` - Upper bound on a single completion request
    pub fn new(api_key: SecretString, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (compatible endpoints, tests, proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into a [`GroqChatRequest`].
    fn to_groq_request(&self, request: &CompletionRequest) -> GroqChatRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| GroqMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        GroqChatRequest {
            model: request.model.clone(),
            messages,
            max_tokens: request.max_tokens,
        }
    }

    /// Map a non-success HTTP status to an [`LlmError`].
    fn error_for_status(status: reqwest::StatusCode, body: String) -> LlmError {
        match status.as_u16() {
            401 => LlmError::AuthenticationFailed,
            429 => LlmError::RateLimited {
                retry_after_ms: None,
            },
            _ => LlmError::Provider {
                message: format!("HTTP {status}: {body}"),
            },
        }
    }
}

// GroqProvider intentionally does NOT derive Debug to prevent accidental
// exposure of internal state. The SecretString field ensures the API key
// is never printed, but we also omit Debug entirely.

impl CompletionProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_groq_request(request);
        let url = self.url("/chat/completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Provider {
                        message: format!("HTTP request failed: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status, error_body));
        }

        let groq_resp: GroqChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        // First choice's message content; absent or null content becomes an
        // empty reply, which the exchange coordinator substitutes.
        let content = groq_resp
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        let usage = groq_resp
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: groq_resp.id,
            content,
            model: groq_resp.model,
            usage,
        })
    }
}

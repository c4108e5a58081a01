//! Groq chat completions API types.
//!
//! These are Groq-specific request/response structures used for HTTP
//! communication with the OpenAI-compatible chat completions endpoint.
//! They are NOT the generic completion types from parlance-types -- those
//! are provider-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for the chat completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GroqChatRequest {
    pub model: String,
    pub messages: Vec<GroqMessage>,
    pub max_tokens: u32,
}

/// A single message in a chat completions conversation.
#[derive(Debug, Clone, Serialize)]
pub struct GroqMessage {
    pub role: String,
    pub content: String,
}

/// Response body from the chat completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GroqChatResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<GroqChoice>,
    pub usage: Option<GroqUsage>,
}

/// One generated choice.
#[derive(Debug, Clone, Deserialize)]
pub struct GroqChoice {
    pub message: GroqResponseMessage,
}

/// The assistant message within a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct GroqResponseMessage {
    /// Reply text; may be null or absent for content-free turns.
    pub content: Option<String>,
}

/// Token usage from Groq.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroqUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groq_request_serialization() {
        let req = GroqChatRequest {
            model: "llama-3.3-70b-versatile".to_string(),
            messages: vec![
                GroqMessage {
                    role: "system".to_string(),
                    content: "You are helpful.".to_string(),
                },
                GroqMessage {
                    role: "user".to_string(),
                    content: "Hello".to_string(),
                },
            ],
            max_tokens: 300,
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["max_tokens"], 300);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Hello");
    }

    #[test]
    fn test_groq_response_deserialization() {
        let json = r#"{
            "id": "chatcmpl-abc123",
            "model": "llama-3.3-70b-versatile",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello!"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49}
        }"#;
        let resp: GroqChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.id, "chatcmpl-abc123");
        assert_eq!(resp.choices.len(), 1);
        assert_eq!(resp.choices[0].message.content.as_deref(), Some("Hello!"));
        let usage = resp.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 42);
        assert_eq!(usage.completion_tokens, 7);
    }

    #[test]
    fn test_groq_response_null_content() {
        let json = r#"{
            "id": "chatcmpl-def456",
            "model": "llama-3.3-70b-versatile",
            "choices": [{"message": {"role": "assistant", "content": null}}],
            "usage": null
        }"#;
        let resp: GroqChatResponse = serde_json::from_str(json).unwrap();
        assert!(resp.choices[0].message.content.is_none());
        assert!(resp.usage.is_none());
    }

    #[test]
    fn test_groq_response_missing_content_field() {
        let json = r#"{
            "id": "chatcmpl-ghi789",
            "model": "llama-3.3-70b-versatile",
            "choices": [{"message": {"role": "assistant"}}]
        }"#;
        let resp: GroqChatResponse = serde_json::from_str(json).unwrap();
        assert!(resp.choices[0].message.content.is_none());
    }

    #[test]
    fn test_groq_response_empty_choices() {
        let json = r#"{
            "id": "chatcmpl-jkl012",
            "model": "llama-3.3-70b-versatile",
            "choices": []
        }"#;
        let resp: GroqChatResponse = serde_json::from_str(json).unwrap();
        assert!(resp.choices.is_empty());
    }
}

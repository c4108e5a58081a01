//! Transcript HTTP handlers.
//!
//! Endpoints:
//! - GET    /api/messages - Return the full transcript
//! - POST   /api/messages - Run one exchange cycle, return the updated transcript
//! - DELETE /api/messages - Clear the transcript

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use parlance_types::message::ChatMessage;

use crate::http::error::ApiError;
use crate::state::AppState;

/// Request body for posting a message.
///
/// `content` is optional so that a missing or `null` field falls through to
/// the blank-content validation (HTTP 400) instead of a deserialization
/// rejection with a different shape.
#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// Response body carrying the full transcript.
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<ChatMessage>,
}

/// Response body for a transcript reset.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub messages: Vec<ChatMessage>,
}

/// GET /api/messages - Return every persisted message in order.
pub async fn list_messages(State(state): State<AppState>) -> Json<MessagesResponse> {
    let messages = state.exchange.transcript().await;
    Json(MessagesResponse { messages })
}

/// POST /api/messages - Append the user message, obtain the assistant reply,
/// persist both, and return the updated transcript.
pub async fn post_message(
    State(state): State<AppState>,
    payload: Result<Json<PostMessageRequest>, JsonRejection>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let Json(request) = payload?;
    let content = request.content.unwrap_or_default();

    let messages = state.exchange.handle_user_message(&content).await?;
    Ok(Json(MessagesResponse { messages }))
}

/// DELETE /api/messages - Clear the transcript and persist the empty state.
pub async fn reset_messages(
    State(state): State<AppState>,
) -> Result<Json<ResetResponse>, ApiError> {
    let messages = state.exchange.reset().await?;
    Ok(Json(ResetResponse {
        success: true,
        messages,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{Body, to_bytes};
    use axum::extract::FromRequest;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use secrecy::SecretString;
    use tempfile::TempDir;

    use parlance_core::exchange::service::ExchangeService;
    use parlance_infra::llm::groq::GroqProvider;
    use parlance_infra::store::JsonTranscriptStore;
    use parlance_types::config::RelayConfig;

    fn test_state(dir: &Path) -> AppState {
        let store = JsonTranscriptStore::new(dir.join("transcript.json"));
        let provider = GroqProvider::new(
            SecretString::from("test-key-not-real"),
            Duration::from_secs(5),
        );
        AppState {
            exchange: Arc::new(ExchangeService::new(store, provider, RelayConfig::default())),
            data_dir: dir.to_path_buf(),
        }
    }

    /// Run the extractor against an unparsable body to obtain the real
    /// rejection the handler signature receives.
    async fn malformed_rejection() -> JsonRejection {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/api/messages")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        Json::<PostMessageRequest>::from_request(request, &())
            .await
            .unwrap_err()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_malformed_body_yields_400_error_shape() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(tmp.path());

        let rejection = malformed_rejection().await;
        let err = post_message(State(state), Err(rejection)).await.unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
        // Nothing was persisted.
        assert!(!tmp.path().join("transcript.json").exists());
    }

    #[tokio::test]
    async fn test_missing_content_yields_400_required_message() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(tmp.path());

        let payload = Ok(Json(PostMessageRequest { content: None }));
        let err = post_message(State(state), payload).await.unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Message content required");
        assert!(!tmp.path().join("transcript.json").exists());
    }

    #[test]
    fn test_post_request_with_content() {
        let request: PostMessageRequest = serde_json::from_str(r#"{"content": "hello"}"#).unwrap();
        assert_eq!(request.content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_post_request_missing_content_is_none() {
        let request: PostMessageRequest = serde_json::from_str("{}").unwrap();
        assert!(request.content.is_none());
    }

    #[test]
    fn test_post_request_null_content_is_none() {
        let request: PostMessageRequest = serde_json::from_str(r#"{"content": null}"#).unwrap();
        assert!(request.content.is_none());
    }

    #[test]
    fn test_messages_response_shape() {
        let response = MessagesResponse {
            messages: vec![ChatMessage::user("hi")],
        };
        let value = serde_json::to_value(&response).unwrap();

        assert!(value["messages"].is_array());
        assert_eq!(value["messages"][0]["content"], "hi");
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn test_reset_response_shape() {
        let response = ResetResponse {
            success: true,
            messages: vec![],
        };
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["messages"], serde_json::json!([]));
    }
}

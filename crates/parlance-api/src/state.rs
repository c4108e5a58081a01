//! Application state wiring the exchange service together.
//!
//! The exchange service is generic over the transcript store and completion
//! provider traits, but AppState pins it to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use parlance_core::exchange::service::ExchangeService;
use parlance_infra::config::{load_relay_config, resolve_data_dir};
use parlance_infra::llm::groq::GroqProvider;
use parlance_infra::store::JsonTranscriptStore;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteExchangeService = ExchangeService<JsonTranscriptStore, GroqProvider>;

/// Shared application state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub exchange: Arc<ConcreteExchangeService>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve the data directory, load
    /// configuration, wire the store and provider into the exchange service.
    pub async fn init(data_dir_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = data_dir_override.unwrap_or_else(resolve_data_dir);

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_relay_config(&data_dir).await;

        // The server still starts without a key. Every completion call will
        // fail authentication and the exchange substitutes its fallback reply,
        // so the transcript endpoints keep working.
        let api_key = match std::env::var("GROQ_API_KEY") {
            Ok(key) => SecretString::from(key),
            Err(_) => {
                tracing::warn!("GROQ_API_KEY is not set; completions will fail");
                SecretString::from(String::new())
            }
        };

        let mut provider =
            GroqProvider::new(api_key, Duration::from_secs(config.request_timeout_secs));
        if let Some(base_url) = config.base_url.clone() {
            provider = provider.with_base_url(base_url);
        }

        let store = JsonTranscriptStore::new(data_dir.join("transcript.json"));
        let exchange = ExchangeService::new(store, provider, config);

        Ok(Self {
            exchange: Arc::new(exchange),
            data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_uses_data_dir_override() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("relay-home");

        let state = AppState::init(Some(dir.clone())).await.unwrap();

        assert_eq!(state.data_dir, dir);
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_init_starts_with_empty_transcript() {
        let tmp = TempDir::new().unwrap();

        let state = AppState::init(Some(tmp.path().to_path_buf())).await.unwrap();

        assert!(state.exchange.transcript().await.is_empty());
    }
}

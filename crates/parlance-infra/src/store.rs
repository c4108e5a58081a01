//! JSON-file transcript store.
//!
//! Implements `TranscriptStore` from `parlance-core` on a single file
//! holding the pretty-printed JSON array of messages. Writes go through a
//! temp file plus an atomic rename so a concurrent reader sees either the
//! old transcript or the new one, never a partial write.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use parlance_core::transcript::TranscriptStore;
use parlance_types::error::StoreError;
use parlance_types::message::ChatMessage;

/// File-backed implementation of `TranscriptStore`.
///
/// All I/O goes through `tokio::fs`. A missing file is a normal empty
/// transcript; an unreadable or unparseable file is an error, and the
/// policy for recovering from that lives in the exchange coordinator.
pub struct JsonTranscriptStore {
    path: PathBuf,
}

impl JsonTranscriptStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file the transcript is persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temp file for atomic writes, in the same directory as the target
    /// (rename is only atomic within one filesystem).
    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "transcript.json".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

impl TranscriptStore for JsonTranscriptStore {
    async fn load(&self) -> Result<Vec<ChatMessage>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no transcript file, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::Read(err.to_string())),
        };

        serde_json::from_str(&content).map_err(|err| StoreError::Malformed(err.to_string()))
    }

    async fn save(&self, messages: &[ChatMessage]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(messages)
            .map_err(|err| StoreError::Write(err.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|err| StoreError::Write(err.to_string()))?;
            }
        }

        let tmp = self.tmp_path();
        let mut file = tokio::fs::File::create(&tmp)
            .await
            .map_err(|err| StoreError::Write(err.to_string()))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|err| StoreError::Write(err.to_string()))?;
        // fsync before the rename so the rename never publishes an
        // incompletely flushed file.
        file.sync_all()
            .await
            .map_err(|err| StoreError::Write(err.to_string()))?;
        drop(file);

        if let Err(err) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Write(err.to_string()));
        }
        Ok(())
    }

    async fn reset(&self) -> Result<(), StoreError> {
        self.save(&[]).await
    }
}

use thiserror::Error;

/// Errors related to transcript persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("read error: {0}")]
    Read(String),

    #[error("write error: {0}")]
    Write(String),

    #[error("malformed transcript: {0}")]
    Malformed(String),
}

/// Errors from the exchange cycle (used by trait definitions in parlance-core).
///
/// Provider failures never appear here: the coordinator converts them into a
/// fallback assistant reply instead of surfacing them.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("message content required")]
    EmptyContent,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

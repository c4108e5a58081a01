//! HTTP/REST API layer for Parlance.
//!
//! Axum-based REST API at `/api/` with CORS support and a plain-text
//! liveness route at `/`.

pub mod error;
pub mod handlers;
pub mod router;

//! HTTP facade over the inventory backend.
//!
//! Three calls, one round trip each, no retry:
//! `GET /api/health`, `GET /api/products`, `POST /api/scan`.

pub mod client;

pub use client::{DEFAULT_TIMEOUT, InventoryApi};

/// Errors from the write path and from building the client.
/// Read calls never surface errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request itself failed (connection refused, DNS, TLS, ...).
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. `message` is the
    /// server-provided text when it sent one, `HTTP <status>` otherwise.
    #[error("{message}")]
    Server { status: u16, message: String },
}

use axum::http::StatusCode;
use thiserror::Error;

/// Failures talking to the external identity provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP status {status} from {context}")]
    Http { status: StatusCode, context: String },
    #[error("Invalid JSON body from {context}: {message}")]
    InvalidJson { context: String, message: String },
}

/// Failures persisting or restoring client state stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt storage entry: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! Error types for the Larder store
//!
//! This module defines error types for each layer:
//! - `DomainError`: the error taxonomy callers of repositories and services see
//! - `StoreError`: document store adapter errors (HTTP or in-memory)
//! - `ConfigError`: configuration loading errors

use thiserror::Error;

/// Domain layer errors
///
/// Repository CRUD calls report "not found" and "duplicate id" as values
/// (`false` / `None`), so `NotFound` and `Conflict` only show up here when a
/// service needs a prerequisite that is missing.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl StoreError {
    /// Whether retrying the same call may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Request(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            StoreError::Timeout(_) | StoreError::Unavailable(_) | StoreError::RateLimited => true,
            StoreError::Api { status, .. } => *status >= 500,
            StoreError::PermissionDenied(_) | StoreError::Deserialization(_) => false,
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::PermissionDenied(msg) => DomainError::PermissionDenied(msg),
            StoreError::Deserialization(msg) => DomainError::Internal(msg),
            StoreError::Api { status, message } if status < 500 && status != 429 => {
                DomainError::Internal(format!("store rejected request ({status}): {message}"))
            }
            e => DomainError::StorageUnavailable(e.to_string()),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

//! Shared error types for the services crate.

use thiserror::Error;

use signs_core::model::MediaError;

/// Errors emitted by `IdentityProvider` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IdentityError {
    #[error("{0}")]
    Rejected(String),
    #[error("identity provider returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("identity provider sent an unreadable profile: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the detection hub.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DetectionError {
    #[error("detection feed closed")]
    Closed,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error("detection hub capacity must be > 0")]
    InvalidDetectionCapacity,
}

//! Error types shared across the session core.
//!
//! ERROR HANDLING
//! ==============
//! Transport-level failures (`ApiError`) never reach pages directly. The auth
//! service folds them into the user-facing `AuthError` taxonomy, whose
//! `Display` output is the message shown in transient notifications.

use thiserror::Error;

/// Failure talking to the identity backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status code.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// HTTP calls are only issued from the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

/// User-facing authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Registration failed")]
    RegistrationFailed,
    #[error("Session is no longer valid")]
    SessionInvalid,
}

/// Invalid build-time configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: expected true/false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
    #[error("{var}: expected a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var}: must not be empty")]
    Empty { var: &'static str },
}

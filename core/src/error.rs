//! Error types for the to-do view.
//!
//! # Design
//! Every non-2xx status lands in `ApiError::Status` regardless of its code;
//! the view logs request failures and never surfaces them to the user.
//! `ValidationError` is the only error the user sees.

use thiserror::Error;

/// A failed list/create/update/delete round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (network failure, aborted fetch).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Input rejected before any request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a title")]
    EmptyTitle,
}

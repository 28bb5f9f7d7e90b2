//! Error types for the client API caller.
//!
//! # Design
//! 400 and 500 responses both carry an envelope, so their messages are kept
//! as `Consistency` and `Server`. Statuses the API never produces land in
//! `HttpError` with the raw body.

use thiserror::Error;

/// Errors returned by `ClientApiClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400: the request was rejected; the messages are caller-actionable.
    #[error("rejected: {}", .0.join("; "))]
    Consistency(Vec<String>),

    /// 500: the server failed; the messages are generic.
    #[error("server error: {}", .0.join("; "))]
    Server(Vec<String>),

    /// 200 with an envelope that carries no data.
    #[error("response envelope carried no data")]
    MissingData,

    /// Any other status code.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

//! Uniform response envelope returned by every endpoint.
//!
//! Serialized as `{ "data": <T|null>, "errors": [string, ...] }`. Exactly one
//! of the two sides is populated; the fields are private and values are only
//! built through [`ApiResponse::ok`], [`ApiResponse::error`] and
//! [`ApiResponse::with_errors`]. The type is serialize-only.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApiResponse<T> {
    data: Option<T>,
    errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data` and no errors.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Failed envelope carrying a single error message and no data.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![message.into()],
        }
    }

    /// Failed envelope carrying `errors` in order. `None` when `errors` is
    /// empty.
    pub fn with_errors(errors: Vec<String>) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        Some(Self { data: None, errors })
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_ok(&self) -> bool {
        self.data.is_some()
    }
}

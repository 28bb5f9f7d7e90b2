//! DTOs for the client API.
//!
//! Defined independently from the server crate so the wire schema is
//! checked by the integration tests rather than shared by construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bank-card holder as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub tax_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Client {
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            tax_id: tax_id.into(),
            state: None,
            updated_at: None,
        }
    }
}

/// The `{ "data": ..., "errors": [...] }` envelope wrapping every response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<String>,
}

//! Client record exchanged over the API.
//!
//! The endpoint layer never inspects these fields; validation and the
//! server-assigned values (`id`, `updated_at`) belong to the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bank-card holder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Assigned by the service on first save.
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    /// National tax id (CPF), 11 digits.
    pub tax_id: String,
    /// Two-letter federative unit.
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

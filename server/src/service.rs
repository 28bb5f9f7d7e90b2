use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::model::Client;

/// Validation and persistence for client records.
///
/// Lookups report a missing record as [`ServiceError::NotFound`] instead of an
/// empty value, so the endpoint layer can always tell "not found" apart from
/// an unexpected failure.
#[async_trait]
pub trait ClientService: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Client, ServiceError>;

    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Client, ServiceError>;

    /// Validate and persist `client`, returning the stored record with any
    /// server-assigned fields filled in.
    async fn save(&self, client: Client) -> Result<Client, ServiceError>;
}

/// Handle shared by every request through axum state.
pub type SharedService = Arc<dyn ClientService>;

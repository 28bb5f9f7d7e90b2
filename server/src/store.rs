//! In-memory [`ClientService`] used by the binary and the integration tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::ServiceError;
use crate::model::Client;
use crate::service::ClientService;

const TAX_ID_LEN: usize = 11;

#[derive(Default)]
struct Clients {
    by_id: HashMap<i32, Client>,
    last_id: i32,
}

impl Clients {
    fn next_id(&mut self) -> Result<i32, ServiceError> {
        self.last_id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Unexpected("client id sequence exhausted".into()))?;
        Ok(self.last_id)
    }
}

/// Keeps clients in a map guarded by a `RwLock`.
///
/// `save` without an id creates a record; `save` with an id replaces an
/// existing one and fails with `NotFound` when the id is unknown.
#[derive(Default)]
pub struct InMemoryClientService {
    clients: RwLock<Clients>,
}

impl InMemoryClientService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientService for InMemoryClientService {
    async fn find_by_id(&self, id: i32) -> Result<Client, ServiceError> {
        let clients = self.clients.read().await;
        clients
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Client not found for id {id}")))
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Client, ServiceError> {
        if !is_valid_tax_id(tax_id) {
            return Err(ServiceError::Consistency(format!("Invalid tax id: {tax_id}")));
        }
        let clients = self.clients.read().await;
        clients
            .by_id
            .values()
            .find(|c| c.tax_id == tax_id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Client not found for tax id {tax_id}")))
    }

    async fn save(&self, mut client: Client) -> Result<Client, ServiceError> {
        validate(&mut client)?;

        let mut clients = self.clients.write().await;
        if clients
            .by_id
            .values()
            .any(|c| c.tax_id == client.tax_id && c.id != client.id)
        {
            return Err(ServiceError::Consistency(format!(
                "Tax id already registered: {}",
                client.tax_id
            )));
        }

        let id = match client.id {
            Some(id) if clients.by_id.contains_key(&id) => id,
            Some(id) => {
                return Err(ServiceError::NotFound(format!("Client not found for id {id}")));
            }
            None => clients.next_id()?,
        };

        client.id = Some(id);
        client.updated_at = Some(Utc::now());
        clients.by_id.insert(id, client.clone());
        Ok(client)
    }
}

fn is_valid_tax_id(tax_id: &str) -> bool {
    tax_id.len() == TAX_ID_LEN && tax_id.bytes().all(|b| b.is_ascii_digit())
}

/// Check required fields and normalize the record in place.
fn validate(client: &mut Client) -> Result<(), ServiceError> {
    let name = client.name.trim();
    if name.is_empty() {
        return Err(ServiceError::Consistency("Client name is required".into()));
    }
    client.name = name.to_string();

    if !is_valid_tax_id(&client.tax_id) {
        return Err(ServiceError::Consistency(format!(
            "Invalid tax id: {}",
            client.tax_id
        )));
    }

    if let Some(state) = client.state.as_mut() {
        if state.len() != 2 || !state.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ServiceError::Consistency(format!("Invalid state: {state}")));
        }
        state.make_ascii_uppercase();
    }

    Ok(())
}

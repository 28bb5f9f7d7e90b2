//! REST endpoints for looking up and saving bank-card clients.
//!
//! # Overview
//! Three routes under `/api/client` each delegate to one [`ClientService`]
//! operation and wrap the outcome in an [`ApiResponse`] envelope:
//!
//! | Method | Path | Service call |
//! |---|---|---|
//! | GET | `/api/client/{id}` | [`ClientService::find_by_id`] |
//! | GET | `/api/client/taxid/{taxid}` | [`ClientService::find_by_tax_id`] |
//! | POST | `/api/client` | [`ClientService::save`] |
//!
//! Consistency errors map to 400 with their message; every other failure
//! maps to 500 with [`GENERIC_ERROR_MESSAGE`].

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod service;
pub mod store;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

pub use envelope::ApiResponse;
pub use error::{ApiError, ServiceError, GENERIC_ERROR_MESSAGE};
pub use model::Client;
pub use service::{ClientService, SharedService};
pub use store::InMemoryClientService;

/// Router with any-origin CORS.
pub fn app(service: SharedService) -> Router {
    app_with_origins(service, &["*".to_string()])
}

/// Router with CORS restricted to `cors_origins` (`"*"` allows any origin).
///
/// Unmatched paths and methods answer with an error envelope too.
pub fn app_with_origins(service: SharedService, cors_origins: &[String]) -> Router {
    let router = Router::new()
        .route("/api/client", post(handlers::save))
        .route("/api/client/{id}", get(handlers::find_by_id))
        .route("/api/client/taxid/{taxid}", get(handlers::find_by_tax_id))
        .fallback(handlers::unmatched_route)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(service);
    middleware::apply(router, cors_origins)
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

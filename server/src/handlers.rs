//! HTTP handlers for `/api/client`.
//!
//! Each handler binds its input, calls exactly one [`ClientService`]
//! operation and hands the outcome to [`respond`], which logs the branch
//! taken and builds the envelope. Binding failures take the same route as a
//! consistency error.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{Method, Uri},
    Json,
};
use tracing::{error, info};

use crate::envelope::ApiResponse;
use crate::error::{ApiError, ServiceError};
use crate::model::Client;
use crate::service::SharedService;

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// `GET /api/client/{id}`
pub async fn find_by_id(
    State(service): State<SharedService>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Client> {
    let result = match id {
        Ok(Path(id)) => {
            info!(id, "fetching client by id");
            service.find_by_id(id).await
        }
        Err(rejection) => Err(rejection.into()),
    };
    respond(result)
}

/// `GET /api/client/taxid/{taxid}`
pub async fn find_by_tax_id(
    State(service): State<SharedService>,
    tax_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Client> {
    let result = match tax_id {
        Ok(Path(tax_id)) => {
            info!(%tax_id, "fetching client by tax id");
            service.find_by_tax_id(&tax_id).await
        }
        Err(rejection) => Err(rejection.into()),
    };
    respond(result)
}

/// `POST /api/client`
pub async fn save(
    State(service): State<SharedService>,
    payload: Result<Json<Client>, JsonRejection>,
) -> ApiResult<Client> {
    let result = match payload {
        Ok(Json(client)) => {
            info!(?client, "saving client");
            service.save(client).await
        }
        Err(rejection) => Err(rejection.into()),
    };
    respond(result)
}

/// Fallback for paths no route matches.
pub async fn unmatched_route(method: Method, uri: Uri) -> ApiResult<()> {
    respond(Err(ServiceError::NotFound(format!(
        "No route for {method} {}",
        uri.path()
    ))))
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiResult<()> {
    respond(Err(ServiceError::Consistency(format!(
        "Method {method} not allowed for {}",
        uri.path()
    ))))
}

fn respond<T>(result: Result<T, ServiceError>) -> ApiResult<T> {
    match result {
        Ok(data) => Ok(Json(ApiResponse::ok(data))),
        Err(err) if err.is_consistency() => {
            info!(error = %err, "data inconsistency");
            Err(err.into())
        }
        Err(err) => {
            error!(error = %err, "application error");
            Err(err.into())
        }
    }
}

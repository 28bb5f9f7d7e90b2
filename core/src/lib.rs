//! Caller-side core for the client API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip.
//!
//! # Design
//! - `ClientApiClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every response is decoded through the `{data, errors}` envelope and
//!   mapped to `Ok(Client)` or a typed `ApiError`.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ClientApiClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ApiResponse, Client};

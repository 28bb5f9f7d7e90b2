//! Tower layers applied to every route.
//!
//! Outermost first: request tracing, then CORS.

use axum::{http::Method, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Wrap `router` with tracing and CORS for the configured origins.
pub fn apply(router: Router, cors_origins: &[String]) -> Router {
    router
        .layer(build_cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// A wildcard `"*"` in the list allows any origin. Otherwise each entry is
/// parsed into an explicit allowlist; unparsable entries are skipped.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

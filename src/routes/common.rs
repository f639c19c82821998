//! Common routes: greeting, health, version.

use crate::handlers::common::{health, hello, version};
use axum::{routing::get, Router};

/// GET /, GET /health, GET /version. Stateless.
pub fn common_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .route("/version", get(version))
}

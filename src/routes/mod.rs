//! Router assembly.

mod books;
mod common;

pub use books::book_routes;
pub use common::common_routes;

use crate::handlers::common::{envelope_rejections, not_found};
use crate::state::AppState;
use axum::{middleware::map_response, Router};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: common routes, `/api/books`, envelope 404 fallback,
/// request body cap and request tracing. Oversized bodies get the 413 envelope.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes())
        .nest("/api/books", book_routes(state))
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(map_response(envelope_rejections))
        .layer(TraceLayer::new_for_http())
}

//! Book resource routes, mounted under `/api/books`.

use crate::handlers::books::{create, delete as delete_handler, list, read, update};
use crate::handlers::common::method_not_allowed;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create).fallback(method_not_allowed))
        .route(
            "/:id",
            get(read)
                .put(update)
                .delete(delete_handler)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

//! Book CRUD handlers: list, get, create, update, delete.

use crate::error::AppError;
use crate::extractors::BookId;
use crate::response::{success_many, success_message, success_one_ok, success_one_with_message};
use crate::state::AppState;
use crate::validation::RequestValidator;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Map, Value};

/// Parse the raw body as a JSON object. Anything else is a 400 before other checks run.
fn body_to_map(body: &Bytes) -> Result<Map<String, Value>, AppError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(m)) => Ok(m),
        _ => Err(AppError::BadRequest("Request must be JSON".into())),
    }
}

/// GET /api/books
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = state.store.list().await?;
    Ok(success_many(books))
}

/// GET /api/books/:id
pub async fn read(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<impl IntoResponse, AppError> {
    let book = state
        .store
        .find(id)
        .await?
        .ok_or_else(AppError::book_not_found)?;
    Ok(success_one_ok(book))
}

/// POST /api/books
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(&body)?;
    let new_book = RequestValidator::new_book(&body)?;
    let book = state.store.insert(new_book).await?;
    tracing::info!(id = book.id, "book created");
    Ok(success_one_with_message(
        StatusCode::CREATED,
        book,
        "Book created successfully",
    ))
}

/// PUT /api/books/:id
///
/// Existence is checked before the body, so an unknown id is a 404 even when
/// the body is not JSON.
pub async fn update(
    State(state): State<AppState>,
    BookId(id): BookId,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    state
        .store
        .find(id)
        .await?
        .ok_or_else(AppError::book_not_found)?;
    let body = body_to_map(&body)?;
    let patch = RequestValidator::patch(&body)?;
    let book = state.store.update(id, patch).await?;
    tracing::info!(id, "book updated");
    Ok(success_one_with_message(
        StatusCode::OK,
        book,
        "Book updated successfully",
    ))
}

/// DELETE /api/books/:id
pub async fn delete(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<impl IntoResponse, AppError> {
    state.store.delete(id).await?;
    tracing::info!(id, "book deleted");
    Ok(success_message(format!("Book with ID {} has been deleted", id)))
}

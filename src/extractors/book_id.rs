//! Extract a positive integer book id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// A path id that parsed as a positive integer. Anything else is rejected as
/// "Book not found", the same as an id that does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::book_not_found())?;
        parse_book_id(&raw).map(BookId).ok_or_else(AppError::book_not_found)
    }
}

fn parse_book_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

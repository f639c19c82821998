//! Book persistence. Handlers only reach the collection through [`BookStore`].

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, BOOKS_TABLE_DDL};

use crate::error::AppError;
use crate::model::{Book, BookPatch, NewBook};
use async_trait::async_trait;

#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books in insertion order.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    async fn find(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// Assigns a fresh id and returns the stored book.
    async fn insert(&self, book: NewBook) -> Result<Book, AppError>;

    /// Applies `patch` to the book with `id`. `AppError::NotFound` if it does not exist.
    async fn update(&self, id: i64, patch: BookPatch) -> Result<Book, AppError>;

    /// `AppError::NotFound` if no book has `id`.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

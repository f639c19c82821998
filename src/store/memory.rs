//! In-process book list. Contents are lost when the process exits.

use super::BookStore;
use crate::error::AppError;
use crate::model::{Book, BookPatch, NewBook};
use async_trait::async_trait;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct Inner {
    books: Vec<Book>,
    /// Next id to hand out. Only ever grows, so ids are not reused after a delete.
    next_id: i64,
}

#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Start from existing records. The counter resumes after the largest id.
    pub fn with_books(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { books, next_id }),
        }
    }

    pub fn with_sample_books() -> Self {
        Self::with_books(vec![
            Book {
                id: 1,
                title: "On the Road".into(),
                author: "Jack Kerouac".into(),
                year: 1957,
            },
            Book {
                id: 2,
                title: "Harry Potter and the Philosopher's Stone".into(),
                author: "J.K. Rowling".into(),
                year: 1997,
            },
        ])
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.read().books.clone())
    }

    async fn find(&self, id: i64) -> Result<Option<Book>, AppError> {
        Ok(self.read().books.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, book: NewBook) -> Result<Book, AppError> {
        let mut inner = self.write();
        let book = book.into_book(inner.next_id);
        inner.next_id += 1;
        inner.books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: i64, patch: BookPatch) -> Result<Book, AppError> {
        let mut inner = self.write();
        let book = inner
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(AppError::book_not_found)?;
        book.apply(patch);
        Ok(book.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.write();
        let pos = inner
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(AppError::book_not_found)?;
        inner.books.remove(pos);
        Ok(())
    }
}

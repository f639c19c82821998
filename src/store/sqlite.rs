//! `books` table in a SQLite database. One short-lived connection per operation, no pool.

use super::BookStore;
use crate::error::AppError;
use crate::model::{Book, BookPatch, NewBook};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;

pub const BOOKS_TABLE_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        year INTEGER NOT NULL
    )
"#;

#[derive(Clone, Debug)]
pub struct SqliteStore {
    options: SqliteConnectOptions,
}

impl SqliteStore {
    /// Open (creating the file if missing) and ensure the `books` table exists.
    pub async fn open(database_url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let store = Self { options };
        store.ensure_books_table().await?;
        Ok(store)
    }

    pub async fn ensure_books_table(&self) -> Result<(), AppError> {
        let mut conn = self.connect().await?;
        sqlx::query(BOOKS_TABLE_DDL).execute(&mut conn).await?;
        conn.close().await?;
        Ok(())
    }

    async fn connect(&self) -> Result<SqliteConnection, AppError> {
        Ok(self.options.connect().await?)
    }
}

#[async_trait]
impl BookStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let sql = "SELECT id, title, author, year FROM books ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let mut conn = self.connect().await?;
        let rows: Vec<Book> = sqlx::query_as(sql).fetch_all(&mut conn).await?;
        conn.close().await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<Book>, AppError> {
        let sql = "SELECT id, title, author, year FROM books WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let mut conn = self.connect().await?;
        let row: Option<Book> = sqlx::query_as(sql).bind(id).fetch_optional(&mut conn).await?;
        conn.close().await?;
        Ok(row)
    }

    async fn insert(&self, book: NewBook) -> Result<Book, AppError> {
        let sql = "INSERT INTO books (title, author, year) VALUES (?, ?, ?) RETURNING id, title, author, year";
        tracing::debug!(sql = %sql, "query");
        let mut conn = self.connect().await?;
        let row: Book = sqlx::query_as(sql)
            .bind(book.title)
            .bind(book.author)
            .bind(book.year)
            .fetch_one(&mut conn)
            .await?;
        conn.close().await?;
        Ok(row)
    }

    async fn update(&self, id: i64, patch: BookPatch) -> Result<Book, AppError> {
        // NULL parameters fall back to the stored column value.
        let sql = r#"
            UPDATE books
            SET title = COALESCE(?, title), author = COALESCE(?, author), year = COALESCE(?, year)
            WHERE id = ?
            RETURNING id, title, author, year
        "#;
        tracing::debug!(sql = %sql, id, "query");
        let mut conn = self.connect().await?;
        let row: Option<Book> = sqlx::query_as(sql)
            .bind(patch.title)
            .bind(patch.author)
            .bind(patch.year)
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;
        conn.close().await?;
        row.ok_or_else(AppError::book_not_found)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let sql = "DELETE FROM books WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let mut conn = self.connect().await?;
        let result = sqlx::query(sql).bind(id).execute(&mut conn).await?;
        conn.close().await?;
        if result.rows_affected() == 0 {
            return Err(AppError::book_not_found());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open_temp() -> (TempDir, SqliteStore) {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("books.db").display());
        let store = SqliteStore::open(&url).await.unwrap();
        (dir, store)
    }

    fn new_book(title: &str) -> NewBook {
        NewBook {
            title: title.into(),
            author: "test".into(),
            year: 1234,
        }
    }

    #[tokio::test]
    async fn open_is_idempotent() {
        let (dir, store) = open_temp().await;
        store.insert(new_book("a")).await.unwrap();
        let url = format!("sqlite://{}", dir.path().join("books.db").display());
        let reopened = SqliteStore::open(&url).await.unwrap();
        assert_eq!(reopened.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insert_then_find_returns_same_fields() {
        let (_dir, store) = open_temp().await;
        let created = store.insert(new_book("test")).await.unwrap();
        assert_eq!(created.id, 1);
        let found = store.find(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn autoincrement_never_reuses_ids() {
        let (_dir, store) = open_temp().await;
        let a = store.insert(new_book("a")).await.unwrap();
        let b = store.insert(new_book("b")).await.unwrap();
        store.delete(b.id).await.unwrap();
        store.delete(a.id).await.unwrap();
        let c = store.insert(new_book("c")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn partial_update_keeps_other_columns() {
        let (_dir, store) = open_temp().await;
        let b = store.insert(new_book("test")).await.unwrap();
        let updated = store
            .update(
                b.id,
                BookPatch {
                    title: Some("test: Updated".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "test: Updated");
        assert_eq!(updated.author, "test");
        assert_eq!(updated.year, 1234);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (_dir, store) = open_temp().await;
        assert_eq!(store.find(999).await.unwrap(), None);
        let err = store.update(999, BookPatch::default()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let err = store.delete(999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_empties_table() {
        let (_dir, store) = open_temp().await;
        let b = store.insert(new_book("a")).await.unwrap();
        store.delete(b.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}

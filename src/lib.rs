//! Book service: REST CRUD over a single book resource, stored in memory or in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{Book, BookPatch, NewBook};
pub use response::{error_body, success_many, success_message, success_one_ok};
pub use routes::{app, book_routes, common_routes};
pub use state::AppState;
pub use store::{BookStore, MemoryStore, SqliteStore};

//! HTTP handlers for the book resource and the service-level routes.

pub mod books;
pub mod common;

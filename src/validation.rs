//! Request body validation for book create and update.

use crate::error::AppError;
use crate::model::{BookPatch, NewBook};
use serde_json::{Map, Value};

const REQUIRED_FIELDS: [&str; 3] = ["title", "author", "year"];

pub struct RequestValidator;

impl RequestValidator {
    /// All of `title`, `author` and `year` must be present and well typed.
    pub fn new_book(body: &Map<String, Value>) -> Result<NewBook, AppError> {
        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|f| !body.contains_key(*f))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Missing fields: {}",
                missing.join(", ")
            )));
        }
        Ok(NewBook {
            title: text_field(body, "title")?.unwrap_or_default(),
            author: text_field(body, "author")?.unwrap_or_default(),
            year: year_field(body)?.unwrap_or_default(),
        })
    }

    /// Validate only the fields present in body. Unknown keys are ignored.
    pub fn patch(body: &Map<String, Value>) -> Result<BookPatch, AppError> {
        Ok(BookPatch {
            title: text_field(body, "title")?,
            author: text_field(body, "author")?,
            year: year_field(body)?,
        })
    }
}

fn text_field(body: &Map<String, Value>, name: &str) -> Result<Option<String>, AppError> {
    match body.get(name) {
        None => Ok(None),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(Some(s.clone())),
        Some(_) => Err(AppError::BadRequest(format!(
            "{} must be a non-empty string",
            name
        ))),
    }
}

fn year_field(body: &Map<String, Value>) -> Result<Option<i64>, AppError> {
    match body.get("year") {
        None => Ok(None),
        Some(v) => v
            .as_i64()
            .map(Some)
            .ok_or_else(|| AppError::BadRequest("year must be an integer".into())),
    }
}

//! API handlers for the Libros REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use mongodb::bson::oid::ObjectId;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{error::AppError, models::Book, AppState};

/// Message returned when the path identifier is not a 24-hex token
pub const INVALID_BOOK_ID: &str = "ID de libro no es valido";

static OBJECT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("hardcoded regex"));

/// True when `id` has the storage layer's native identifier shape
pub fn is_valid_object_id(id: &str) -> bool {
    OBJECT_ID_RE.is_match(id)
}

/// Extractor that resolves the `{id}` path parameter into a loaded book.
///
/// Shared by every single-resource operation: a malformed identifier is
/// rejected with 400 before the database is touched, an absent book yields
/// 404, and a driver fault on the fetch yields 500. Handlers behind this
/// extractor only ever see an existing book.
pub struct LoadedBook(pub Book);

#[async_trait]
impl FromRequestParts<AppState> for LoadedBook {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Validation(INVALID_BOOK_ID.to_string()))?;

        if !is_valid_object_id(&id) {
            return Err(AppError::Validation(INVALID_BOOK_ID.to_string()));
        }

        // The format check above guarantees this parse succeeds
        let oid = ObjectId::parse_str(&id)
            .map_err(|_| AppError::Validation(INVALID_BOOK_ID.to_string()))?;

        let book = state.services.catalog.find_book(oid).await?;
        Ok(LoadedBook(book))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_24_hex_identifiers() {
        assert!(is_valid_object_id("507f1f77bcf86cd799439011"));
        assert!(is_valid_object_id("ABCDEFabcdef012345678901"));
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert!(!is_valid_object_id(""));
        assert!(!is_valid_object_id("123"));
        assert!(!is_valid_object_id("507f1f77bcf86cd79943901")); // 23 chars
        assert!(!is_valid_object_id("507f1f77bcf86cd7994390111")); // 25 chars
        assert!(!is_valid_object_id("507f1f77bcf86cd79943901z")); // non-hex
    }
}

//! Book CRUD endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, CreateBookRequest, UpdateBookRequest},
};

use super::LoadedBook;

/// Message returned when a PATCH body supplies no field at all
pub const AT_LEAST_ONE_FIELD: &str =
    "Al menos uno de estos campos debe ser enviado: titulo, autor, genero, fecha de publicacion.";

/// Confirmation body (delete)
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 404, description = "Collection is empty (body is an empty array)"),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<(StatusCode, Json<Vec<Book>>)> {
    let books = state.services.catalog.list_books().await?;

    // An empty collection answers 404 with an empty array body.
    let status = if books.is_empty() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    Ok((status, Json(books)))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.catalog.create_book(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "24-hex book identifier")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(LoadedBook(book): LoadedBook) -> Json<Book> {
    Json(book)
}

/// Replace a book's fields (absent fields keep their stored value)
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "24-hex book identifier")
    ),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Malformed identifier or invalid fields"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    LoadedBook(book): LoadedBook,
    Json(payload): Json<UpdateBookRequest>,
) -> AppResult<Json<Book>> {
    let updated = state.services.catalog.update_book(book, payload).await?;
    Ok(Json(updated))
}

/// Partially update a book (at least one field required)
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "24-hex book identifier")
    ),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Empty body, malformed identifier or invalid fields"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn patch_book(
    State(state): State<crate::AppState>,
    LoadedBook(book): LoadedBook,
    Json(payload): Json<UpdateBookRequest>,
) -> AppResult<Json<Book>> {
    if payload.is_empty() {
        return Err(crate::AppError::Validation(AT_LEAST_ONE_FIELD.to_string()));
    }

    let updated = state.services.catalog.update_book(book, payload).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "24-hex book identifier")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Book not found"),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    LoadedBook(book): LoadedBook,
) -> AppResult<Json<MessageResponse>> {
    let message = state.services.catalog.delete_book(&book).await?;
    Ok(Json(MessageResponse { message }))
}

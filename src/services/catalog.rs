//! Book catalog service.
//!
//! Holds the validation and merge logic shared by create, replace and
//! partial update. Field contents are validated exactly where the document
//! is built: titles and authors are trimmed and must stay non-empty, the
//! genre must belong to the closed set. Write faults map to 400, read and
//! delete faults stay 500.

use mongodb::bson::oid::ObjectId;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDocument, CreateBookRequest, Genre, UpdateBookRequest},
    repository::Repository,
};

/// Message returned when a path identifier does not resolve to a book
pub const BOOK_NOT_FOUND: &str = "Libro no encontrado";

/// Message returned when a create request is missing required fields
pub const REQUIRED_FIELDS: &str =
    "Los campos titulo, autor, genero y fecha de publicacion son obligatorios.";

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Fetch every book in the collection
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        let docs = self.repository.books.find_all().await?;
        Ok(docs.into_iter().map(Book::from).collect())
    }

    /// Fetch one book by its (already format-checked) identifier
    pub async fn find_book(&self, id: ObjectId) -> AppResult<Book> {
        let doc = self
            .repository
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;
        Ok(Book::from(doc))
    }

    /// Create a new book. All four fields must be present; their contents
    /// are then validated while the document is constructed.
    pub async fn create_book(&self, payload: CreateBookRequest) -> AppResult<Book> {
        let (Some(titulo), Some(autor), Some(genero), Some(fecha_publicacion)) = (
            payload.titulo,
            payload.autor,
            payload.genero,
            payload.fecha_publicacion,
        ) else {
            return Err(AppError::Validation(REQUIRED_FIELDS.to_string()));
        };

        let doc = BookDocument {
            id: None,
            titulo: non_empty_trimmed("titulo", &titulo)?,
            autor: non_empty_trimmed("autor", &autor)?,
            genero: parse_genre(&genero)?,
            fecha_publicacion,
        };

        let created = self
            .repository
            .books
            .insert(doc)
            .await
            .map_err(write_fault)?;

        tracing::info!(titulo = %created.titulo, "book created");
        Ok(Book::from(created))
    }

    /// Replace/partial-update merge: supplied fields win, absent fields keep
    /// the stored value. Used by both PUT and PATCH.
    pub async fn update_book(&self, book: Book, payload: UpdateBookRequest) -> AppResult<Book> {
        let id = parse_id(&book.id)?;

        let doc = BookDocument {
            id: Some(id),
            titulo: match payload.titulo {
                Some(titulo) => non_empty_trimmed("titulo", &titulo)?,
                None => book.titulo,
            },
            autor: match payload.autor {
                Some(autor) => non_empty_trimmed("autor", &autor)?,
                None => book.autor,
            },
            genero: match payload.genero {
                Some(genero) => parse_genre(&genero)?,
                None => book.genero,
            },
            fecha_publicacion: payload.fecha_publicacion.unwrap_or(book.fecha_publicacion),
        };

        self.repository
            .books
            .replace(id, &doc)
            .await
            .map_err(write_fault)?;

        Ok(Book::from(doc))
    }

    /// Delete a book and return the confirmation message
    pub async fn delete_book(&self, book: &Book) -> AppResult<String> {
        let id = parse_id(&book.id)?;
        self.repository.books.delete(id).await?;

        tracing::info!(titulo = %book.titulo, "book deleted");
        Ok(format!(
            "El libro '{}' fue eliminado correctamente.",
            book.titulo
        ))
    }
}

fn parse_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::Internal(format!("Stored book id '{}' is not an ObjectId", id)))
}

fn non_empty_trimmed(field: &'static str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!(
            "El campo {} no puede estar vacio.",
            field
        )));
    }
    Ok(trimmed.to_string())
}

fn parse_genre(value: &str) -> AppResult<Genre> {
    value
        .parse::<Genre>()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Driver faults raised while persisting map to 400, like any other
/// write-side validation failure.
fn write_fault(err: AppError) -> AppError {
    match err {
        AppError::Database(e) => {
            tracing::error!("Write fault: {:?}", e);
            AppError::BadRequest(e.to_string())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts_non_empty_values() {
        assert_eq!(non_empty_trimmed("titulo", "  Dune  ").unwrap(), "Dune");
    }

    #[test]
    fn rejects_whitespace_only_values() {
        let err = non_empty_trimmed("autor", "   ").unwrap_err();
        match err {
            AppError::BadRequest(msg) => {
                assert_eq!(msg, "El campo autor no puede estar vacio.")
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn parses_known_genre() {
        assert_eq!(parse_genre("Historia").unwrap(), Genre::Historia);
    }

    #[test]
    fn rejects_unknown_genre_with_message() {
        let err = parse_genre("Terror").unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("'Terror' no es valido")),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }
}

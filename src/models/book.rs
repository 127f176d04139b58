//! Book model and related types.
//!
//! The wire format uses Spanish field names (`titulo`, `autor`, `genero`,
//! `fecha_publicacion`). The stored document and the API
//! representation differ only in the identifier: MongoDB holds an `ObjectId`
//! under `_id`, the API exposes it as a 24-character hex string under `id`.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// Book genre classification (closed set, enforced on every write)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    #[serde(rename = "Ficción")]
    Ficcion,
    #[serde(rename = "No Ficción")]
    NoFiccion,
    #[serde(rename = "Fantasía")]
    Fantasia,
    #[serde(rename = "Ciencia")]
    Ciencia,
    #[serde(rename = "Historia")]
    Historia,
    #[serde(rename = "Biografía")]
    Biografia,
}

/// The accepted labels, in declaration order
pub const GENRE_LABELS: [&str; 6] = [
    "Ficción",
    "No Ficción",
    "Fantasía",
    "Ciencia",
    "Historia",
    "Biografía",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("El genero '{0}' no es valido. Los generos permitidos son: Ficción, No Ficción, Fantasía, Ciencia, Historia, Biografía.")]
pub struct InvalidGenre(pub String);

impl Genre {
    /// Return the label stored in the database for this genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Ficcion => "Ficción",
            Genre::NoFiccion => "No Ficción",
            Genre::Fantasia => "Fantasía",
            Genre::Ciencia => "Ciencia",
            Genre::Historia => "Historia",
            Genre::Biografia => "Biografía",
        }
    }
}

impl std::str::FromStr for Genre {
    type Err = InvalidGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ficción" => Ok(Genre::Ficcion),
            "No Ficción" => Ok(Genre::NoFiccion),
            "Fantasía" => Ok(Genre::Fantasia),
            "Ciencia" => Ok(Genre::Ciencia),
            "Historia" => Ok(Genre::Historia),
            "Biografía" => Ok(Genre::Biografia),
            other => Err(InvalidGenre(other.to_string())),
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Book
// ---------------------------------------------------------------------------

/// Stored shape of a book in the `books` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDocument {
    /// Assigned by MongoDB on insert, immutable thereafter
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub titulo: String,
    pub autor: String,
    pub genero: Genre,
    pub fecha_publicacion: String,
}

/// API representation of a book
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// 24-character hexadecimal identifier
    pub id: String,
    pub titulo: String,
    pub autor: String,
    pub genero: Genre,
    pub fecha_publicacion: String,
}

impl From<BookDocument> for Book {
    fn from(doc: BookDocument) -> Self {
        Self {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            titulo: doc.titulo,
            autor: doc.autor,
            genero: doc.genero,
            fecha_publicacion: doc.fecha_publicacion,
        }
    }
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Body for POST /books. All four fields are required; presence is checked
/// before any document is constructed, field contents are validated when the
/// document is built.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub genero: Option<String>,
    pub fecha_publicacion: Option<String>,
}

/// Body for PUT/PATCH /books/{id}. Supplied fields replace the stored
/// values, absent fields keep them.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub genero: Option<String>,
    pub fecha_publicacion: Option<String>,
}

impl UpdateBookRequest {
    /// True when no field was supplied at all
    pub fn is_empty(&self) -> bool {
        self.titulo.is_none()
            && self.autor.is_none()
            && self.genero.is_none()
            && self.fecha_publicacion.is_none()
    }
}

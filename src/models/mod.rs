//! Data models for the Libros server

pub mod book;

pub use book::{Book, BookDocument, CreateBookRequest, Genre, UpdateBookRequest};

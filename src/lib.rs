//! Libros Book Catalog Server
//!
//! A Rust REST API server exposing CRUD operations over a book catalog
//! stored in MongoDB. The wire format uses Spanish field names, 24-hex
//! ObjectId identifiers and `{"message": ...}` error bodies.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

//! Repository layer for database operations

pub mod books;

use mongodb::{bson::doc, Database};

use crate::error::AppResult;

/// Main repository struct holding the database handle
#[derive(Clone)]
pub struct Repository {
    pub db: Database,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository bound to the given database
    pub fn new(db: Database) -> Self {
        Self {
            books: books::BooksRepository::new(&db),
            db,
        }
    }

    /// Round-trip to the server, used by the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

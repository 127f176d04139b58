//! Books repository for database operations.
//!
//! Every operation is attempted exactly once; driver faults bubble up as
//! `AppError::Database` and are mapped to an HTTP status by the caller.

use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};

use crate::{
    error::{AppError, AppResult},
    models::book::BookDocument,
};

const COLLECTION_NAME: &str = "books";

#[derive(Clone)]
pub struct BooksRepository {
    collection: Collection<BookDocument>,
}

impl BooksRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<BookDocument>(COLLECTION_NAME),
        }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Fetch every book in the collection
    pub async fn find_all(&self) -> AppResult<Vec<BookDocument>> {
        let cursor = self.collection.find(doc! {}).await?;
        let books = cursor.try_collect().await?;
        Ok(books)
    }

    /// Fetch a book by its identifier; `None` when no document matches
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<BookDocument>> {
        let book = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(book)
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Insert a new book and return it with the assigned identifier
    pub async fn insert(&self, mut book: BookDocument) -> AppResult<BookDocument> {
        let result = self.collection.insert_one(&book).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("Inserted id is not an ObjectId".to_string()))?;
        book.id = Some(id);
        Ok(book)
    }

    /// Replace the stored document for `id` with `book`
    pub async fn replace(&self, id: ObjectId, book: &BookDocument) -> AppResult<()> {
        self.collection
            .replace_one(doc! { "_id": id }, book)
            .await?;
        Ok(())
    }

    /// Delete the book with the given identifier
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}

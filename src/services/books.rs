//! Books service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Insert a book. Database failures are returned as [`AppError::Rejected`]
    /// so the caller sees the raw constraint error.
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        self.repository.books.create(data).await.map_err(|e| match e {
            AppError::Database(err) => AppError::Rejected(err),
            other => other,
        })
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Update a book; a missing id is not an error
    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<()> {
        let updated = self.repository.books.update(id, data).await?;
        tracing::debug!(book_id = id, rows = updated, "book update applied");
        Ok(())
    }

    /// Delete a book; a missing id is not an error
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let deleted = self.repository.books.delete(id).await?;
        tracing::debug!(book_id = id, rows = deleted, "book delete applied");
        Ok(())
    }
}

//! Authors service

use crate::{
    error::AppResult,
    models::author::{Author, CreateAuthor, UpdateAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        self.repository.authors.create(data).await
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// Update an author; a missing id is not an error
    pub async fn update(&self, id: i32, data: &UpdateAuthor) -> AppResult<()> {
        let updated = self.repository.authors.update(id, data).await?;
        tracing::debug!(author_id = id, rows = updated, "author update applied");
        Ok(())
    }

    /// Delete an author; a missing id is not an error
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let deleted = self.repository.authors.delete(id).await?;
        tracing::debug!(author_id = id, rows = deleted, "author delete applied");
        Ok(())
    }
}

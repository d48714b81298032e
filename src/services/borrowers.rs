//! Borrowers service: creation, checkout and return

use crate::{
    error::{AppError, AppResult},
    models::borrower::{Borrower, CreateBorrower},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowersService {
    repository: Repository,
}

impl BorrowersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: &CreateBorrower) -> AppResult<Borrower> {
        self.repository.borrowers.create(data).await
    }

    /// Link a book to a borrower.
    ///
    /// Both records must exist. Books already linked to other borrowers are
    /// not refused, and repeating a checkout for the same pair changes nothing.
    pub async fn checkout(&self, borrower_id: i32, book_id: Option<i32>) -> AppResult<()> {
        let (borrower_id, book_id) = self.resolve(borrower_id, book_id).await?;

        match self.repository.borrowers.add_book(borrower_id, book_id).await? {
            Some(_) => tracing::info!(borrower_id, book_id, "book checked out"),
            None => tracing::debug!(borrower_id, book_id, "book already linked to borrower"),
        }
        Ok(())
    }

    /// Unlink a book from a borrower. Succeeds even if they were not linked.
    pub async fn return_book(&self, borrower_id: i32, book_id: Option<i32>) -> AppResult<()> {
        let (borrower_id, book_id) = self.resolve(borrower_id, book_id).await?;

        let removed = self.repository.borrowers.remove_book(borrower_id, book_id).await?;
        tracing::info!(borrower_id, book_id, removed, "book returned");
        Ok(())
    }

    /// Load both sides of the association, failing if either is missing
    async fn resolve(&self, borrower_id: i32, book_id: Option<i32>) -> AppResult<(i32, i32)> {
        let borrower = self
            .repository
            .borrowers
            .find_by_id(borrower_id)
            .await?
            .ok_or_else(|| AppError::MissingRecord(format!("Borrower {} not found", borrower_id)))?;

        let book = match book_id {
            Some(id) => self.repository.books.find_by_id(id).await?,
            None => None,
        };
        let book = book.ok_or_else(|| match book_id {
            Some(id) => AppError::MissingRecord(format!("Book {} not found", id)),
            None => AppError::MissingRecord("Book not found: bookId is missing".to_string()),
        })?;

        Ok((borrower.id, book.id))
    }
}

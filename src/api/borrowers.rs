//! Borrower endpoints: creation, checkout and return

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::borrower::{Borrower, CreateBorrower},
    AppState,
};

use super::MessageResponse;

/// Body of checkout and return requests
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRefRequest {
    pub book_id: Option<i32>,
}

/// Create a borrower
#[utoipa::path(
    post,
    path = "/borrowers",
    tag = "borrowers",
    request_body = CreateBorrower,
    responses(
        (status = 200, description = "Borrower created", body = Borrower)
    )
)]
pub async fn create_borrower(
    State(state): State<AppState>,
    Json(data): Json<CreateBorrower>,
) -> AppResult<Json<Borrower>> {
    let borrower = state.services.borrowers.create(&data).await?;
    Ok(Json(borrower))
}

/// Check a book out to a borrower
#[utoipa::path(
    post,
    path = "/borrowers/{id}/checkout",
    tag = "borrowers",
    params(("id" = i32, Path, description = "Borrower ID")),
    request_body = BookRefRequest,
    responses(
        (status = 200, description = "Book checked out", body = MessageResponse),
        (status = 500, description = "Borrower or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkout(
    State(state): State<AppState>,
    Path(borrower_id): Path<i32>,
    Json(request): Json<BookRefRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.services.borrowers.checkout(borrower_id, request.book_id).await?;
    Ok(Json(MessageResponse::new("Book checked out")))
}

/// Return a book from a borrower
#[utoipa::path(
    post,
    path = "/borrowers/{id}/return",
    tag = "borrowers",
    params(("id" = i32, Path, description = "Borrower ID")),
    request_body = BookRefRequest,
    responses(
        (status = 200, description = "Book returned (also when it was not checked out)", body = MessageResponse),
        (status = 500, description = "Borrower or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Path(borrower_id): Path<i32>,
    Json(request): Json<BookRefRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.services.borrowers.return_book(borrower_id, request.book_id).await?;
    Ok(Json(MessageResponse::new("Book returned")))
}

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use bookshelf_http::error::ApiError;

use super::models::{Book, BookCreate, BookResponse, BookUpdate, MessageResponse};
use super::store::{BookStore, StoreError};

/// GET / — full id -> Book mapping
pub async fn list_books(State(store): State<Arc<BookStore>>) -> Json<HashMap<String, Book>> {
    Json(store.list().await)
}

/// GET /{id}
pub async fn get_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let book = store
        .get(&id)
        .await
        .map_err(|StoreError::NotFound(_)| ApiError::not_found("book not found."))?;

    Ok(Json(book))
}

/// POST /
pub async fn create_book(
    State(store): State<Arc<BookStore>>,
    Json(input): Json<BookCreate>,
) -> Result<Json<BookResponse>, ApiError> {
    input.validate().map_err(ApiError::validation)?;

    let book = store.create(input).await;

    Ok(Json(BookResponse {
        message: "Book added successfully".to_string(),
        data: book,
    }))
}

/// PUT /{id} — partial update
pub async fn update_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<String>,
    Json(patch): Json<BookUpdate>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = store
        .update(&id, patch)
        .await
        .map_err(|StoreError::NotFound(id)| {
            ApiError::not_found(format!("Book with id: {id} not found"))
        })?;

    Ok(Json(BookResponse {
        message: "Book updated successfully".to_string(),
        data: book,
    }))
}

/// DELETE /{id}
pub async fn delete_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    store
        .delete(&id)
        .await
        .map_err(|StoreError::NotFound(id)| {
            ApiError::not_found(format!("Book with id: {id} not found"))
        })?;

    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
    }))
}

use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Book, BookCreate, BookUpdate};

/// Failures surfaced by the book store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("book {0} not found")]
    NotFound(String),
}

/// Authoritative id -> Book repository, shared across request handlers.
///
/// All mutation goes through the internal lock; each operation takes it
/// exactly once, so individual requests are atomic against each other.
#[derive(Default)]
pub struct BookStore {
    books: RwLock<HashMap<String, Book>>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current contents, no ordering guarantee
    pub async fn list(&self) -> HashMap<String, Book> {
        self.books.read().await.clone()
    }

    /// Look up a book by id
    pub async fn get(&self, id: &str) -> Result<Book, StoreError> {
        self.books
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Insert a new book under a freshly generated UUID
    pub async fn create(&self, input: BookCreate) -> Book {
        let book = Book {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            author: input.author,
            year: input.year,
            pages: input.pages,
            language: input.language,
        };

        self.books
            .write()
            .await
            .insert(book.id.clone(), book.clone());

        tracing::debug!(id = %book.id, "book created");
        book
    }

    /// Merge a partial update into an existing book
    pub async fn update(&self, id: &str, patch: BookUpdate) -> Result<Book, StoreError> {
        let mut books = self.books.write().await;

        let book = books
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        book.apply(patch);

        tracing::debug!(id = %id, "book updated");
        Ok(book.clone())
    }

    /// Remove a book by id
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.books
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        tracing::debug!(id = %id, "book deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> BookCreate {
        BookCreate {
            title: "Johny bravo".to_string(),
            author: "John Doe".to_string(),
            year: 2023,
            pages: 500,
            language: "English".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_unique_uuid_ids() {
        let store = BookStore::new();

        let first = store.create(sample_input()).await;
        let second = store.create(sample_input()).await;

        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
        assert!(Uuid::parse_str(&second.id).is_ok());
        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn get_returns_created_book() {
        let store = BookStore::new();
        let created = store.create(sample_input()).await;

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = BookStore::new();
        let err = store.get("1").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("1".to_string()));
    }

    #[tokio::test]
    async fn update_merges_partial_patch() {
        let store = BookStore::new();
        let created = store.create(sample_input()).await;

        let updated = store
            .update(
                &created.id,
                BookUpdate {
                    title: Some("Johny bravo updated".to_string()),
                    year: Some(2024),
                    pages: Some(600),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Johny bravo updated");
        assert_eq!(updated.year, 2024);
        assert_eq!(updated.pages, 600);
        assert_eq!(updated.author, "John Doe");
        assert_eq!(updated.language, "English");

        // Persisted, not just returned.
        assert_eq!(store.get(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = BookStore::new();
        let err = store
            .update("00000000-0000-0000-0000-000000000000", BookUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound("00000000-0000-0000-0000-000000000000".to_string())
        );
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = BookStore::new();
        let created = store.create(sample_input()).await;

        store.delete(&created.id).await.unwrap();

        let err = store.get(&created.id).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound(created.id));
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let store = BookStore::new();
        let err = store.delete("missing").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("missing".to_string()));
    }
}

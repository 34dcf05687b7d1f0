use serde::{Deserialize, Serialize};
use serde_json::json;

/// A stored book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, a server-generated UUID string
    pub id: String,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Year of publication
    pub year: i32,
    /// Number of pages, at least 1
    pub pages: u32,
    /// Language the book is written in
    pub language: String,
}

impl Book {
    /// Merge the fields present in `patch` into this record, leaving absent
    /// fields untouched.
    pub fn apply(&mut self, patch: BookUpdate) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(pages) = patch.pages {
            self.pages = pages;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
    }
}

/// Request model for creating a new book. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: u32,
    pub language: String,
}

impl BookCreate {
    /// Validate creation input before it touches the store.
    pub fn validate(&self) -> Result<(), Vec<serde_json::Value>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(json!({"field": "title", "error": "must not be empty"}));
        }
        if self.author.trim().is_empty() {
            errors.push(json!({"field": "author", "error": "must not be empty"}));
        }
        if self.language.trim().is_empty() {
            errors.push(json!({"field": "language", "error": "must not be empty"}));
        }
        if self.pages == 0 {
            errors.push(json!({"field": "pages", "error": "must be a positive integer"}));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Request model for a partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Response envelope carrying a message and the affected book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    pub message: String,
    pub data: Book,
}

/// Response envelope carrying only a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: "6f9619ff-8b86-4d01-b42d-00cf4fc964ff".to_string(),
            title: "Johny bravo".to_string(),
            author: "John Doe".to_string(),
            year: 2023,
            pages: 500,
            language: "English".to_string(),
        }
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut book = sample_book();
        book.apply(BookUpdate {
            title: Some("Johny bravo updated".to_string()),
            year: Some(2024),
            pages: Some(600),
            ..Default::default()
        });

        assert_eq!(book.title, "Johny bravo updated");
        assert_eq!(book.year, 2024);
        assert_eq!(book.pages, 600);
        assert_eq!(book.author, "John Doe");
        assert_eq!(book.language, "English");
    }

    #[test]
    fn apply_with_empty_patch_changes_nothing() {
        let mut book = sample_book();
        let before = book.clone();
        book.apply(BookUpdate::default());
        assert_eq!(book, before);
    }

    #[test]
    fn update_deserializes_absent_fields_as_none() {
        let patch: BookUpdate = serde_json::from_str(r#"{"title": "New title"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("New title"));
        assert!(patch.author.is_none());
        assert!(patch.year.is_none());
        assert!(patch.pages.is_none());
        assert!(patch.language.is_none());
    }

    #[test]
    fn create_validation_accepts_well_formed_input() {
        let input = BookCreate {
            title: "Johny bravo".to_string(),
            author: "John Doe".to_string(),
            year: 2023,
            pages: 500,
            language: "English".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_validation_rejects_empty_strings_and_zero_pages() {
        let input = BookCreate {
            title: "  ".to_string(),
            author: "John Doe".to_string(),
            year: 2023,
            pages: 0,
            language: "".to_string(),
        };

        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}

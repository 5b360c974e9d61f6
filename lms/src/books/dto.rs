use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is a catalog entry. Two entries with the same title, author and category are still
// different books, identity is carried by book_id and shared only by clones of one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    book_id: String,
    title: String,
    author: String,
    category: String,
    #[serde(with = "serializer")]
    created_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(title: &str, author: &str, category: &str) -> BookDto {
        BookDto {
            book_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn book_id(&self) -> &str {
        self.book_id.as_str()
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn is_same_book(&self, other: &BookDto) -> bool {
        self.book_id == other.book_id
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }
}

//! Book model, edit form and backend update payload

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Book record as served by the backend catalog API
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(alias = "book_id")]
    pub id: i64,
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub isbn: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub genre: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub publication_year: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub total_copies: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub available_copies: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub authors: Vec<String>,
}

impl Book {
    /// First listed author, or the empty string
    pub fn first_author(&self) -> &str {
        self.authors.first().map(String::as_str).unwrap_or("")
    }
}

/// Edit form as submitted by the browser. Every field is raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BookForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Comma-separated author names
    pub authors: String,
    pub genre: String,
    pub isbn: String,
    pub publication_year: String,
    pub total_copies: String,
    pub available_copies: String,
    pub description: String,
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            authors: book.authors.join(", "),
            genre: book.genre.clone(),
            isbn: book.isbn.clone(),
            publication_year: book.publication_year.to_string(),
            total_copies: book.total_copies.to_string(),
            available_copies: book.available_copies.to_string(),
            description: book.description.clone(),
        }
    }
}

impl BookForm {
    /// Trim surrounding whitespace from every single-line field
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.title,
            &mut self.authors,
            &mut self.genre,
            &mut self.isbn,
            &mut self.publication_year,
            &mut self.total_copies,
            &mut self.available_copies,
        ] {
            *field = field.trim().to_string();
        }
        self
    }

    /// Coerce the raw form text into the payload sent to the backend.
    pub fn to_update(&self) -> AppResult<BookUpdate> {
        let form = self.clone().normalized();
        form.validate()?;

        Ok(BookUpdate {
            publication_year: parse_whole_number("Publication year", &form.publication_year)?,
            total_copies: parse_whole_number("Total copies", &form.total_copies)?,
            available_copies: parse_whole_number("Available copies", &form.available_copies)?,
            authors: split_authors(&form.authors),
            title: form.title,
            genre: form.genre,
            isbn: form.isbn,
            description: form.description,
        })
    }
}

/// JSON body of `PATCH /books/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: String,
    pub authors: Vec<String>,
    pub genre: String,
    pub isbn: String,
    pub publication_year: i64,
    pub total_copies: i64,
    pub available_copies: i64,
    pub description: String,
}

/// Split comma-separated author text into trimmed, non-empty names
pub fn split_authors(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_whole_number(label: &str, value: &str) -> AppResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation(format!("{} must be a whole number", label)))
}

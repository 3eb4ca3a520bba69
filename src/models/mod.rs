//! Data models for the catalog web front end

pub mod book;
pub mod listing;

// Re-export commonly used types
pub use book::{Book, BookForm, BookUpdate};
pub use listing::{ListParams, ListQuery, ListResult, SortKey, PAGE_SIZE};

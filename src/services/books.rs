//! Book resource service shared by every book route

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookForm, ListQuery, ListResult},
    services::{catalog::CatalogApi, listing::apply_listing},
};

#[derive(Clone)]
pub struct BooksService {
    api: Arc<dyn CatalogApi>,
}

impl BooksService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Full, unpaginated collection in backend order
    pub async fn all(&self) -> AppResult<Vec<Book>> {
        Ok(self.api.fetch_books().await?)
    }

    /// One page of the list view
    pub async fn list(&self, query: &ListQuery) -> AppResult<ListResult> {
        let books = self.api.fetch_books().await?;
        let result = apply_listing(books, query);
        tracing::debug!(
            search = %query.search_text,
            sort = query.sort_key.as_str(),
            page = result.current_page,
            matches = result.total_items,
            "book listing computed"
        );
        Ok(result)
    }

    /// Locate a book by id in the freshly fetched collection
    pub async fn find(&self, id: i64) -> AppResult<Book> {
        self.api
            .fetch_books()
            .await?
            .into_iter()
            .find(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Coerce the submitted form and forward it to the backend
    pub async fn update(&self, id: i64, form: &BookForm) -> AppResult<()> {
        let update = form.to_update()?;
        self.api.update_book(id, &update).await?;
        tracing::info!(book_id = id, "book updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.api.delete_book(id).await?;
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }
}

//! Business logic services

pub mod books;
pub mod catalog;
pub mod listing;

use std::sync::Arc;

use crate::config::BackendConfig;
use catalog::{CatalogApi, HttpCatalogClient};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services talking to the configured backend
    pub fn new(backend: &BackendConfig) -> Self {
        Self::with_catalog(Arc::new(HttpCatalogClient::new(&backend.base_url)))
    }

    /// Create all services on top of an existing catalog client
    pub fn with_catalog(catalog: Arc<dyn CatalogApi>) -> Self {
        Self {
            books: books::BooksService::new(catalog),
        }
    }
}

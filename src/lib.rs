//! Catalog Web
//!
//! A server-rendered, staff-facing front end for a library catalog. Books are
//! fetched from a backend REST API on every request, listed with search, sort
//! and pagination, and edited or deleted by forwarding to that API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{ApiError, AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub views: Arc<dyn views::ViewRenderer>,
}

impl AppState {
    /// Wire the HTTP catalog client and template renderer from configuration
    pub fn from_config(config: AppConfig) -> Self {
        let services = services::Services::new(&config.backend);
        let views = views::TemplateRenderer::new(&config.views.dir);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
            views: Arc::new(views),
        }
    }
}

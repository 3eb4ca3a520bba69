//! HTTP handlers and router for the staff-facing pages

pub mod books;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        // Books
        .route("/books", get(books::list_books))
        .route("/books/:id", get(books::show_book))
        .route("/books/:id/edit", get(books::edit_book))
        .route("/books/:id/update", post(books::update_book))
        .route("/books/:id/delete", post(books::delete_book))
        // Placeholders
        .route("/members", get(pages::members))
        .route("/borrowing", get(pages::borrowing))
        // Health check
        .route("/health", get(health::health_check))
        .fallback(pages::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

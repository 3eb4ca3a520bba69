//! Home page, static placeholder pages and the not-found fallback

use axum::{extract::State, response::Response};
use serde_json::json;

use crate::{error::AppResult, models::Book, views::View, AppState};

use super::books::{failure_view, not_found_view};

/// GET / - every book in backend order, no pagination
pub async fn home(State(state): State<AppState>) -> AppResult<Response> {
    let view = match state.services.books.all().await {
        Ok(books) => home_view(books, None),
        Err(e) => failure_view(e, |msg| home_view(Vec::new(), Some(msg))),
    };

    view.into_response_with(state.views.as_ref())
}

/// GET /members
pub async fn members(State(state): State<AppState>) -> AppResult<Response> {
    View::new("members.html", json!({ "activePage": "members" }))
        .into_response_with(state.views.as_ref())
}

/// GET /borrowing
pub async fn borrowing(State(state): State<AppState>) -> AppResult<Response> {
    View::new("borrowing.html", json!({ "activePage": "borrowing" }))
        .into_response_with(state.views.as_ref())
}

/// Any route not matched above
pub async fn not_found(State(state): State<AppState>) -> AppResult<Response> {
    not_found_view("Page not found").into_response_with(state.views.as_ref())
}

fn home_view(books: Vec<Book>, api_error: Option<String>) -> View {
    View::new(
        "homepage.html",
        json!({
            "activePage": "home",
            "books": books,
            "apiError": api_error,
        }),
    )
}

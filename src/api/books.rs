//! Book pages: list, detail, edit, update, delete

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookForm, ListParams, ListQuery, ListResult},
    views::View,
    AppState,
};

const BOOK_NOT_FOUND: &str = "Book not found";

/// GET /books?q=&sort=&page=
pub async fn list_books(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    let query = ListParams::from_pairs(pairs).into_query();

    let view = match state.services.books.list(&query).await {
        Ok(result) => list_view(&query, result, None),
        Err(e) => failure_view(e, |msg| {
            list_view(&query, ListResult::empty(query.page), Some(msg))
        }),
    };

    view.into_response_with(state.views.as_ref())
}

/// GET /books/:id
pub async fn show_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&raw_id) else {
        return not_found_view(BOOK_NOT_FOUND).into_response_with(state.views.as_ref());
    };

    let view = match state.services.books.find(id).await {
        Ok(book) => detail_view(Some(&book), None),
        Err(e) => failure_view(e, |msg| detail_view(None, Some(msg))),
    };

    view.into_response_with(state.views.as_ref())
}

/// GET /books/:id/edit
pub async fn edit_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&raw_id) else {
        return not_found_view(BOOK_NOT_FOUND).into_response_with(state.views.as_ref());
    };

    let view = match state.services.books.find(id).await {
        Ok(book) => edit_view(id, &BookForm::from(&book), None),
        Err(e) => failure_view(e, |msg| edit_view(id, &BookForm::default(), Some(msg))),
    };

    view.into_response_with(state.views.as_ref())
}

/// POST /books/:id/update
pub async fn update_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&raw_id) else {
        return not_found_view(BOOK_NOT_FOUND).into_response_with(state.views.as_ref());
    };

    match state.services.books.update(id, &form).await {
        Ok(()) => Ok(Redirect::to(&format!("/books/{}", id)).into_response()),
        Err(e) => failure_view(e, |msg| edit_view(id, &form, Some(msg)))
            .into_response_with(state.views.as_ref()),
    }
}

/// POST /books/:id/delete
pub async fn delete_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&raw_id) else {
        return not_found_view(BOOK_NOT_FOUND).into_response_with(state.views.as_ref());
    };

    let delete_error = match state.services.books.delete(id).await {
        Ok(()) => return Ok(Redirect::to("/books").into_response()),
        Err(e) => e,
    };
    tracing::warn!(book_id = id, "Delete failed: {}", delete_error);

    // Show the current list alongside the delete failure
    let query = ListQuery::default();
    let result = match state.services.books.list(&query).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Re-fetch after failed delete also failed: {}", e);
            ListResult::empty(query.page)
        }
    };

    list_view(&query, result, Some(delete_error.to_string()))
        .into_response_with(state.views.as_ref())
}

/// Ids that are not integers cannot exist in the catalog
fn parse_id(raw_id: &str) -> Option<i64> {
    raw_id.trim().parse().ok()
}

/// Not-found errors get the dedicated 404 page; everything else is shown
/// inline on the page built by `inline`, keeping status 200.
pub(crate) fn failure_view(err: AppError, inline: impl FnOnce(String) -> View) -> View {
    match err {
        AppError::NotFound(message) => not_found_view(&message),
        other => {
            tracing::warn!("Rendering inline error: {}", other);
            inline(other.to_string())
        }
    }
}

pub(crate) fn not_found_view(message: &str) -> View {
    View::new(
        "not_found.html",
        json!({ "activePage": "books", "message": message }),
    )
    .with_status(StatusCode::NOT_FOUND)
}

fn list_view(query: &ListQuery, result: ListResult, api_error: Option<String>) -> View {
    View::new(
        "books.html",
        json!({
            "activePage": "books",
            "books": result.items,
            "searchQuery": query.search_text,
            "sort": query.sort_key,
            "currentPage": result.current_page,
            "totalPages": result.total_pages,
            "totalBooks": result.total_items,
            "apiError": api_error,
        }),
    )
}

fn detail_view(book: Option<&Book>, api_error: Option<String>) -> View {
    View::new(
        "book.html",
        json!({
            "activePage": "books",
            "book": book,
            "apiError": api_error,
        }),
    )
}

fn edit_view(id: i64, form: &BookForm, api_error: Option<String>) -> View {
    View::new(
        "book_edit.html",
        json!({
            "activePage": "books",
            "bookId": id,
            "form": form,
            "apiError": api_error,
        }),
    )
}

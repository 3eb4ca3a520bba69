//! Router-level tests with a fake catalog and a recording renderer

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{app, book, get, numbered_books, post_form, FakeCatalog};

const DUNE_FORM: &str = "title=Dune&authors=Frank+Herbert&genre=SciFi&isbn=123\
    &publication_year=1965&total_copies=5&available_copies=3&description=desert+planet";

fn ids(books: &serde_json::Value) -> Vec<i64> {
    books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_third_page_of_twenty_five() {
    let catalog = Arc::new(FakeCatalog::with_books(numbered_books(25)));

    let page = get(app(catalog), "/books?q=&sort=title&page=3").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.template(), "books.html");
    let ctx = page.context();
    assert_eq!(ids(&ctx["books"]), vec![21, 22, 23, 24, 25]);
    assert_eq!(ctx["totalPages"], 3);
    assert_eq!(ctx["currentPage"], 3);
    assert_eq!(ctx["apiError"], json!(null));
}

#[tokio::test]
async fn test_list_defaults_and_bad_page() {
    let catalog = Arc::new(FakeCatalog::with_books(numbered_books(12)));

    let ctx = get(app(catalog), "/books?page=banana&sort=nonsense").await.context();

    assert_eq!(ctx["currentPage"], 1);
    assert_eq!(ctx["sort"], "title");
    assert_eq!(ctx["searchQuery"], "");
    assert_eq!(ids(&ctx["books"]).len(), 10);
}

#[tokio::test]
async fn test_list_repeated_page_param_uses_first() {
    let catalog = Arc::new(FakeCatalog::with_books(numbered_books(25)));

    let page = get(app(catalog), "/books?page=2&page=3").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.template(), "books.html");
    let ctx = page.context();
    assert_eq!(ctx["currentPage"], 2);
    assert_eq!(ids(&ctx["books"]), (11..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_list_search_and_sort() {
    let catalog = Arc::new(FakeCatalog::with_books(vec![
        book(1, "Dune", &["Frank Herbert"]),
        book(2, "Dune Messiah", &["Frank Herbert"]),
        book(3, "Emma", &["Jane Austen"]),
        book(4, "Children of Dune", &["Frank Herbert"]),
    ]));

    let ctx = get(app(catalog), "/books?q=herbert&sort=published").await.context();

    assert_eq!(ids(&ctx["books"]), vec![4, 2, 1]);
    assert_eq!(ctx["searchQuery"], "herbert");
    assert_eq!(ctx["totalBooks"], 3);
}

#[tokio::test]
async fn test_backend_failure_is_rendered_inline() {
    let catalog = Arc::new(FakeCatalog {
        fetch_status: Some(500),
        ..FakeCatalog::default()
    });

    let page = get(app(catalog), "/books").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.template(), "books.html");
    let ctx = page.context();
    assert_eq!(ctx["books"], json!([]));
    let message = ctx["apiError"].as_str().unwrap();
    assert!(!message.is_empty());
    assert!(message.contains("500"));
}

#[tokio::test]
async fn test_detail_view() {
    let catalog = Arc::new(FakeCatalog::with_books(vec![
        book(1, "Dune", &["Frank Herbert"]),
        book(2, "Emma", &["Jane Austen"]),
    ]));

    let page = get(app(catalog), "/books/2").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.template(), "book.html");
    assert_eq!(page.context()["book"]["title"], "Emma");
}

#[tokio::test]
async fn test_missing_book_is_404() {
    let catalog = Arc::new(FakeCatalog::with_books(vec![book(1, "Dune", &[])]));

    let page = get(app(catalog.clone()), "/books/999").await;
    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert_eq!(page.template(), "not_found.html");
    assert_eq!(page.context()["message"], "Book not found");

    let page = get(app(catalog), "/books/not-a-number/edit").await;
    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert_eq!(page.context()["message"], "Book not found");
}

#[tokio::test]
async fn test_detail_backend_failure_stays_200() {
    let catalog = Arc::new(FakeCatalog {
        fetch_status: Some(503),
        ..FakeCatalog::default()
    });

    let page = get(app(catalog), "/books/1").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.template(), "book.html");
    assert_eq!(page.context()["book"], json!(null));
    assert!(page.context()["apiError"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn test_edit_form_is_prefilled() {
    let catalog = Arc::new(FakeCatalog::with_books(vec![book(
        5,
        "Good Omens",
        &["Terry Pratchett", "Neil Gaiman"],
    )]));

    let page = get(app(catalog), "/books/5/edit").await;

    assert_eq!(page.template(), "book_edit.html");
    let ctx = page.context();
    assert_eq!(ctx["bookId"], 5);
    assert_eq!(ctx["form"]["authors"], "Terry Pratchett, Neil Gaiman");
    assert_eq!(ctx["form"]["publication_year"], "1955");
}

#[tokio::test]
async fn test_update_redirects_to_detail() {
    let catalog = Arc::new(FakeCatalog::with_books(vec![book(7, "Old title", &[])]));

    let page = post_form(app(catalog.clone()), "/books/7/update", DUNE_FORM).await;

    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location(), Some("/books/7"));

    let updates = catalog.updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    let (id, update) = &updates[0];
    assert_eq!(*id, 7);
    assert_eq!(update.title, "Dune");
    assert_eq!(update.authors, vec!["Frank Herbert".to_string()]);
    assert_eq!(update.publication_year, 1965);
    assert_eq!(update.total_copies, 5);
    assert_eq!(update.available_copies, 3);
    assert_eq!(update.description, "desert planet");
}

#[tokio::test]
async fn test_update_failure_keeps_submitted_values() {
    let catalog = Arc::new(FakeCatalog {
        update_status: Some(500),
        ..FakeCatalog::default()
    });

    let page = post_form(app(catalog), "/books/7/update", DUNE_FORM).await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.template(), "book_edit.html");
    let ctx = page.context();
    assert_eq!(ctx["form"]["title"], "Dune");
    assert_eq!(ctx["form"]["total_copies"], "5");
    assert!(ctx["apiError"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_update_with_bad_number_is_not_sent() {
    let catalog = Arc::new(FakeCatalog::default());

    let page = post_form(
        app(catalog.clone()),
        "/books/7/update",
        "title=Dune&authors=Frank+Herbert&publication_year=soon&total_copies=5&available_copies=3",
    )
    .await;

    assert_eq!(page.status, StatusCode::OK);
    let ctx = page.context();
    assert_eq!(ctx["form"]["publication_year"], "soon");
    assert_eq!(ctx["apiError"], "Publication year must be a whole number");
    assert!(catalog.updates.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_redirects_to_list() {
    let catalog = Arc::new(FakeCatalog::with_books(vec![book(3, "Emma", &[])]));

    let page = post_form(app(catalog.clone()), "/books/3/delete", "").await;

    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location(), Some("/books"));
    assert_eq!(*catalog.deletes.lock().unwrap(), vec![3]);
}

#[tokio::test]
async fn test_delete_failure_refetches_list() {
    let catalog = Arc::new(FakeCatalog {
        books: numbered_books(3),
        delete_status: Some(409),
        ..FakeCatalog::default()
    });

    let page = post_form(app(catalog), "/books/2/delete", "").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.template(), "books.html");
    let ctx = page.context();
    assert_eq!(ids(&ctx["books"]), vec![1, 2, 3]);
    assert!(ctx["apiError"].as_str().unwrap().contains("409"));
}

#[tokio::test]
async fn test_home_lists_every_book() {
    let catalog = Arc::new(FakeCatalog::with_books(numbered_books(15)));

    let page = get(app(catalog), "/").await;

    assert_eq!(page.template(), "homepage.html");
    assert_eq!(ids(&page.context()["books"]).len(), 15);
}

#[tokio::test]
async fn test_placeholder_pages() {
    let catalog = Arc::new(FakeCatalog::default());

    let page = get(app(catalog.clone()), "/members").await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.template(), "members.html");
    assert_eq!(page.context()["activePage"], "members");

    let page = get(app(catalog), "/borrowing").await;
    assert_eq!(page.template(), "borrowing.html");
    assert_eq!(page.context()["activePage"], "borrowing");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let page = get(app(Arc::new(FakeCatalog::default())), "/shelves").await;

    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert_eq!(page.context()["message"], "Page not found");
}

#[tokio::test]
async fn test_health_check() {
    let page = get(app(Arc::new(FakeCatalog::default())), "/health").await;

    assert_eq!(page.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&page.body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "http://localhost:3000/api");
}

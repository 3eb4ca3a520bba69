//! Filter, sort and paginate a fetched book collection

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::models::{Book, ListQuery, ListResult, SortKey, PAGE_SIZE};

/// Produce one page of the list view from the full collection.
pub fn apply_listing(books: Vec<Book>, query: &ListQuery) -> ListResult {
    let mut filtered = filter_books(books, &query.search_text);
    sort_books(&mut filtered, query.sort_key);

    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE).max(1);
    let page = query.page.max(1);

    let start = (page - 1).saturating_mul(PAGE_SIZE);
    let items = filtered.into_iter().skip(start).take(PAGE_SIZE).collect();

    ListResult {
        items,
        total_pages,
        current_page: page,
        total_items,
    }
}

/// Keep books whose title or any author contains `search_text`, ignoring case
pub fn filter_books(books: Vec<Book>, search_text: &str) -> Vec<Book> {
    if search_text.is_empty() {
        return books;
    }

    let needle = search_text.to_lowercase();
    books
        .into_iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&needle)
                || book
                    .authors
                    .iter()
                    .any(|author| author.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort by the requested key
pub fn sort_books(books: &mut [Book], key: SortKey) {
    match key {
        SortKey::Title => books.sort_by(|a, b| collate(&a.title, &b.title)),
        SortKey::Author => books.sort_by(|a, b| collate(a.first_author(), b.first_author())),
        SortKey::Published => books.sort_by(|a, b| b.publication_year.cmp(&a.publication_year)),
        SortKey::Availability => {
            books.sort_by(|a, b| b.available_copies.cmp(&a.available_copies))
        }
    }
}

/// Human-friendly string ordering: accents and case are ignored first, then
/// lowercase sorts before uppercase, then raw text breaks remaining ties.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// `false` for lowercase letters so they order first
fn case_key(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

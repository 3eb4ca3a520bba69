//! List view query parameters and results

use serde::Serialize;

use super::book::Book;

/// Books shown per list page
pub const PAGE_SIZE: usize = 10;

/// Ordering applied to the book list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Title,
    Author,
    /// Newest first
    Published,
    /// Most available copies first
    Availability,
}

impl SortKey {
    /// Parse a `sort` parameter, falling back to title ordering
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "author" => SortKey::Author,
            "published" => SortKey::Published,
            "availability" => SortKey::Availability,
            _ => SortKey::Title,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Published => "published",
            SortKey::Availability => "availability",
        }
    }
}

/// Raw `?q=&sort=&page=` parameters. Kept as text so that malformed values
/// fall back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl ListParams {
    /// Collect raw query pairs. A repeated parameter keeps its first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "sort" => &mut params.sort,
                "page" => &mut params.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn into_query(self) -> ListQuery {
        ListQuery {
            search_text: self.q.map(|q| q.trim().to_string()).unwrap_or_default(),
            sort_key: self
                .sort
                .as_deref()
                .map(SortKey::parse_or_default)
                .unwrap_or_default(),
            page: self.page.as_deref().map(parse_page).unwrap_or(1),
        }
    }
}

/// Page numbers that are not positive integers become page 1
fn parse_page(value: &str) -> usize {
    match value.trim().parse::<i64>() {
        Ok(page) if page > 0 => page as usize,
        _ => 1,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search_text: String,
    pub sort_key: SortKey,
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: SortKey::Title,
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListResult {
    pub items: Vec<Book>,
    pub total_pages: usize,
    pub current_page: usize,
    /// Number of books left after filtering, across all pages
    pub total_items: usize,
}

impl ListResult {
    /// Nothing to show, e.g. because the backend could not be reached
    pub fn empty(page: usize) -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
            current_page: page,
            total_items: 0,
        }
    }
}

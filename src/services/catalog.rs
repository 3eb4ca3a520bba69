//! Backend catalog API client

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::{
    error::ApiError,
    models::{Book, BookUpdate},
};

/// Operations the front end needs from the backend catalog.
///
/// Every call is a single attempt: failures are reported upward immediately.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full book collection
    async fn fetch_books(&self) -> Result<Vec<Book>, ApiError>;

    /// Apply an edit to one book
    async fn update_book(&self, id: i64, update: &BookUpdate) -> Result<(), ApiError>;

    /// Remove one book
    async fn delete_book(&self, id: i64) -> Result<(), ApiError>;
}

/// reqwest implementation of [`CatalogApi`], rooted at a configurable base URL
#[derive(Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    const RESOURCE: &'static str = "books";

    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, Self::RESOURCE)
    }

    fn member_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, Self::RESOURCE, id)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn fetch_books(&self) -> Result<Vec<Book>, ApiError> {
        let url = self.collection_url();
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        check_status(&response)?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ApiError::PayloadShape(e.to_string()))?;
        decode_collection(payload)
    }

    async fn update_book(&self, id: i64, update: &BookUpdate) -> Result<(), ApiError> {
        let url = self.member_url(id);
        tracing::debug!("PATCH {}", url);

        let response = self
            .http
            .patch(&url)
            .header(ACCEPT, "application/json")
            .json(update)
            .send()
            .await?;
        check_status(&response)
    }

    async fn delete_book(&self, id: i64) -> Result<(), ApiError> {
        let url = self.member_url(id);
        tracing::debug!("DELETE {}", url);

        let response = self
            .http
            .delete(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        check_status(&response)
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::HttpStatus(status))
    }
}

/// Accept only `{ "success": true, "data": [...] }`
fn decode_collection(payload: Value) -> Result<Vec<Book>, ApiError> {
    if payload.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(ApiError::PayloadShape(
            "missing or false `success` flag".to_string(),
        ));
    }

    match payload.get("data") {
        Some(data @ Value::Array(_)) => serde_json::from_value(data.clone())
            .map_err(|e| ApiError::PayloadShape(e.to_string())),
        _ => Err(ApiError::PayloadShape(
            "`data` is not an array".to_string(),
        )),
    }
}

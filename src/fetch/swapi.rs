//! SWAPI page fetcher
//!
//! Collection pages live at `{base}/{kind}/?page=N` and look like
//! `{"count": 82, "next": "...", "previous": null, "results": [...]}`.
//! Asking for a page past the end yields HTTP 404, which is how the end of
//! a collection is detected.

use super::types::{Page, PageFetcher};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::resource::{fetcher_for, ResourceKind};
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Public SWAPI root
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Wire shape of a collection page
#[derive(Debug, Deserialize)]
struct PageBody {
    #[serde(default)]
    count: Option<u64>,
    results: Vec<JsonValue>,
}

/// [`PageFetcher`] backed by the SWAPI REST API
#[derive(Debug)]
pub struct SwapiClient {
    http: HttpClient,
}

impl SwapiClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_http(HttpClient::with_config(config.http_config())?))
    }

    /// Wrap an already configured HTTP client
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[async_trait]
impl PageFetcher for SwapiClient {
    async fn fetch_page(&self, kind: ResourceKind, page: u32) -> Result<Page> {
        let url = fetcher_for(kind).page_url(page);
        debug!(%kind, page, "fetching page");

        let body: PageBody = match self.http.get_json(&url).await {
            Ok(body) => body,
            Err(Error::HttpStatus { status: 404, .. }) => {
                return Err(Error::page_not_found(kind, page))
            }
            Err(Error::JsonParse(e)) => {
                return Err(Error::decode(format!("{kind} page {page}: {e}")))
            }
            Err(e) => return Err(e),
        };

        let items = body
            .results
            .into_iter()
            .map(|item| into_object(kind, item))
            .collect::<Result<Vec<_>>>()?;

        debug!(%kind, page, items = items.len(), "fetched page");
        let page = Page::new(page, items);
        Ok(match body.count {
            Some(total) => page.with_total(total),
            None => page,
        })
    }

    async fn fetch_one(&self, kind: ResourceKind, id: u32) -> Result<JsonObject> {
        let url = fetcher_for(kind).item_url(id);
        debug!(%kind, id, "fetching item");

        match self.http.get_json::<JsonValue>(&url).await {
            Ok(item) => into_object(kind, item),
            Err(Error::HttpStatus { status: 404, .. }) => Err(Error::NotFound { kind, id }),
            Err(e) => Err(e),
        }
    }
}

fn into_object(kind: ResourceKind, value: JsonValue) -> Result<JsonObject> {
    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(Error::decode(format!(
            "expected a {} object, got {other}",
            kind.singular()
        ))),
    }
}

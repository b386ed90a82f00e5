//! Fetch contract types
//!
//! Defines the boundary between the query engine and the transport.

use crate::error::Result;
use crate::resource::ResourceKind;
use crate::types::JsonObject;
use async_trait::async_trait;

/// One decoded page of a collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// 1-based page number
    pub number: u32,
    /// Raw items, in remote order
    pub items: Vec<JsonObject>,
    /// Collection size reported by the API, if any. Informational only.
    pub total: Option<u64>,
}

impl Page {
    /// Create a page from its items
    pub fn new(number: u32, items: Vec<JsonObject>) -> Self {
        Self {
            number,
            items,
            total: None,
        }
    }

    /// Attach the reported collection size
    #[must_use]
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Source of pages and single items for each resource kind
///
/// Implementations own timeouts and retries. Past the last page,
/// `fetch_page` must fail with [`Error::PageNotFound`]; any other error is
/// treated as retryable by the caller.
///
/// [`Error::PageNotFound`]: crate::error::Error::PageNotFound
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch page `page` (starting at 1) of `kind`
    async fn fetch_page(&self, kind: ResourceKind, page: u32) -> Result<Page>;

    /// Fetch a single item of `kind` by identifier
    async fn fetch_one(&self, kind: ResourceKind, id: u32) -> Result<JsonObject>;
}


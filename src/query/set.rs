//! Lazy query sequence
//!
//! Presents a paginated remote collection as one forward-only sequence of
//! records. Pages are fetched one at a time, only when the current page has
//! been handed out completely.

use super::state::QueryState;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::resource::{constructor_for, Record, ResourceKind};
use futures::stream::{self, Stream};
use tracing::{debug, info};

/// Lazy, restartable sequence over every record of one kind
///
/// Construction performs no I/O. Each [`advance`](Self::advance) either
/// returns a buffered record or performs exactly one page fetch.
pub struct QuerySet<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    state: QueryState,
}

impl<'a, F: PageFetcher + ?Sized> QuerySet<'a, F> {
    /// Create a sequence over all records of `kind`
    pub fn new(fetcher: &'a F, kind: ResourceKind) -> Self {
        Self {
            fetcher,
            state: QueryState::new(kind),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.state.kind()
    }

    /// Current progress
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// True once the collection is known to be exhausted
    pub fn is_exhausted(&self) -> bool {
        self.state.is_terminal()
    }

    /// Records in the current page buffer
    pub fn buffered_len(&self) -> usize {
        self.state.buffered_len()
    }

    /// Records handed out so far by this sequence
    pub fn consumed(&self) -> u64 {
        self.state.consumed()
    }

    /// A new sequence over the same kind, starting again at page 1.
    ///
    /// Shares nothing with `self` but the fetcher.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::new(self.fetcher, self.state.kind())
    }

    /// Next record, or `Ok(None)` once the collection is exhausted.
    ///
    /// A fetch error other than "page not found" is returned as is and
    /// leaves the state untouched, so calling again re-requests the same
    /// page. Once exhausted, every call returns `Ok(None)` without I/O.
    pub async fn advance(&mut self) -> Result<Option<Record>> {
        loop {
            if let Some(record) = self.state.take_buffered() {
                return Ok(Some(record));
            }
            if self.state.is_terminal() {
                return Ok(None);
            }

            let kind = self.state.kind();
            let page_number = self.state.next_page();

            let page = match self.fetcher.fetch_page(kind, page_number).await {
                Ok(page) => page,
                Err(e) if e.is_page_not_found() => {
                    info!(
                        %kind,
                        pages = page_number - 1,
                        records = self.state.consumed(),
                        "collection exhausted"
                    );
                    self.state.mark_terminal();
                    return Ok(None);
                }
                Err(e) => {
                    debug!(%kind, page = page_number, error = %e, "page fetch failed");
                    return Err(e);
                }
            };

            let construct = constructor_for(kind);
            let records = page
                .items
                .into_iter()
                .map(construct)
                .collect::<Result<Vec<_>>>()?;

            debug!(%kind, page = page_number, records = records.len(), "page loaded");
            // An empty page is not the end; the loop asks for the next one.
            self.state.load_page(page_number, records);
        }
    }

    /// Drain the rest of the sequence into a vector
    pub async fn collect_all(mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(record) = self.advance().await? {
            records.push(record);
        }
        Ok(records)
    }

    /// Take up to `limit` further records
    pub async fn take_records(&mut self, limit: usize) -> Result<Vec<Record>> {
        let mut records = Vec::with_capacity(limit.min(self.state.remaining()));
        while records.len() < limit {
            match self.advance().await? {
                Some(record) => records.push(record),
                None => break,
            }
        }
        Ok(records)
    }

    /// Total size of the remote collection.
    ///
    /// Drains a fresh sequence of the same kind; this sequence's own
    /// position is left untouched. Costs one request per page.
    pub async fn count(&self) -> Result<u64> {
        let mut fresh = self.restart();
        while fresh.advance().await?.is_some() {}
        Ok(fresh.consumed())
    }

    /// Adapt into a [`Stream`] of records.
    ///
    /// The stream ends when the collection is exhausted and also after
    /// yielding the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Record>> + 'a {
        stream::try_unfold(self, |mut set| async move {
            Ok(set.advance().await?.map(|record| (record, set)))
        })
    }
}

impl<F: PageFetcher + ?Sized> std::fmt::Debug for QuerySet<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuerySet")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//! Entry points: "all of a kind" and "one by id"

use super::set::QuerySet;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::resource::{constructor_for, Record, Resource, ResourceKind};
use tracing::debug;

/// Lazy sequence over every record of `kind`. Performs no I/O.
pub fn all<F: PageFetcher + ?Sized>(fetcher: &F, kind: ResourceKind) -> QuerySet<'_, F> {
    QuerySet::new(fetcher, kind)
}

/// Fetch a single record of `kind` by identifier
pub async fn get_record<F: PageFetcher + ?Sized>(
    fetcher: &F,
    kind: ResourceKind,
    id: u32,
) -> Result<Record> {
    let item = fetcher.fetch_one(kind, id).await?;
    let record = constructor_for(kind)(item)?;
    debug!(%kind, id, label = record.label(), "fetched record");
    Ok(record)
}

/// Fetch a single typed record by identifier
///
/// ```rust,ignore
/// let luke: Person = get(&client, 1).await?;
/// ```
pub async fn get<R: Resource, F: PageFetcher + ?Sized>(fetcher: &F, id: u32) -> Result<R> {
    get_record(fetcher, R::KIND, id).await?.try_into()
}

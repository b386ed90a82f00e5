//! Query module
//!
//! The lazy paginated query engine.
//!
//! # Overview
//!
//! [`QuerySet`] walks a collection page by page through a
//! [`PageFetcher`](crate::fetch::PageFetcher), building records with the
//! registry constructor for its kind. It detects the end of a collection
//! only by the fetcher failing with `PageNotFound`; it never retries.

mod lookup;
mod set;
mod state;

pub use lookup::{all, get, get_record};
pub use set::QuerySet;
pub use state::QueryState;

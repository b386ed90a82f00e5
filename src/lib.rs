#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Star Wars API client
//!
//! Typed, lazy access to the paginated SWAPI collections (people, films).
//!
//! ## Features
//!
//! - **Lazy pagination**: a collection reads like one sequence; pages are
//!   fetched only when the previous one has been consumed
//! - **Typed records**: `Person` and `Film` with an escape hatch for every
//!   attribute not promoted to a field
//! - **Closed registry**: each kind maps to its constructor and endpoint in
//!   one table, checked by the compiler
//! - **Resilient transport**: retries, backoff and rate limiting live in the
//!   HTTP layer, never in the query engine
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use starwars_api::{query, ClientConfig, Person, ResourceKind, SwapiClient};
//!
//! #[tokio::main]
//! async fn main() -> starwars_api::Result<()> {
//!     let client = SwapiClient::new(&ClientConfig::default())?;
//!
//!     let mut films = query::all(&client, ResourceKind::Film);
//!     while let Some(film) = films.advance().await? {
//!         println!("{film}");
//!     }
//!
//!     let luke: Person = query::get(&client, 1).await?;
//!     println!("{luke}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  QuerySet: advance() → buffered record | one page fetch │
//! └──────────────┬───────────────────────────┬──────────────┘
//!                │                           │
//! ┌──────────────┴─────────┐   ┌─────────────┴──────────────┐
//! │ Registry               │   │ PageFetcher                │
//! │ kind → constructor     │   │ fetch_page / fetch_one     │
//! │ kind → endpoint        │   │ SwapiClient → HttpClient   │
//! └────────────────────────┘   └────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Resource kinds, records and the registry
pub mod resource;

/// Page fetch contract and the SWAPI implementation
pub mod fetch;

/// Lazy paginated queries
pub mod query;

/// HTTP client with retry and rate limiting
pub mod http;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use fetch::{Page, PageFetcher, SwapiClient};
pub use query::{QuerySet, QueryState};
pub use resource::{Film, Person, Record, Resource, ResourceKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Page fetching module
//!
//! The query engine only ever talks to a [`PageFetcher`]. [`SwapiClient`]
//! is the HTTP implementation; tests substitute scripted fetchers.

mod swapi;
mod types;

pub use swapi::{SwapiClient, DEFAULT_BASE_URL};
pub use types::{Page, PageFetcher};

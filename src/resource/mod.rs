//! Resource module
//!
//! Kinds: People, Films
//!
//! # Overview
//!
//! Every remote resource kind has three parts: a [`ResourceKind`] tag, a
//! typed record (`Person`, `Film`), and one [`registry`] entry that ties
//! the tag to its record constructor and API endpoint. Adding a kind means
//! adding those three, nothing else.

mod kind;
mod record;
pub mod registry;

pub use kind::ResourceKind;
pub use record::{Film, Person, Record, Resource};
pub use registry::{constructor_for, fetcher_for, Endpoint, RecordConstructor, ResourceEntry};

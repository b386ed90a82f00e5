//! Resource registry
//!
//! A closed table keyed by [`ResourceKind`]. Each entry says how to build a
//! record from a decoded item and where the kind lives on the API. Lookups
//! are exhaustive `match`es, so an unregistered kind does not compile.

use super::kind::ResourceKind;
use super::record::{Film, Person, Record, Resource};
use crate::error::Result;
use crate::types::JsonObject;

/// Builds a typed record from one decoded page item
pub type RecordConstructor = fn(JsonObject) -> Result<Record>;

/// One row of the registry
#[derive(Debug)]
pub struct ResourceEntry {
    /// Kind this entry describes
    pub kind: ResourceKind,
    /// API path segment (collection endpoint)
    pub path: &'static str,
    /// Singular name, accepted as an alias when parsing
    pub singular: &'static str,
    /// Attribute used as the display label
    pub label_field: &'static str,
    /// Record constructor
    pub construct: RecordConstructor,
}

/// Where a kind's pages are fetched from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    kind: ResourceKind,
    path: &'static str,
}

impl Endpoint {
    /// Kind served by this endpoint
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Collection path segment, e.g. `films`
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Relative URL of one page, e.g. `films/?page=2`
    pub fn page_url(&self, page: u32) -> String {
        format!("{}/?page={page}", self.path)
    }

    /// Relative URL of one item, e.g. `people/5/`
    pub fn item_url(&self, id: u32) -> String {
        format!("{}/{id}/", self.path)
    }
}

static PEOPLE: ResourceEntry = ResourceEntry {
    kind: ResourceKind::Person,
    path: "people",
    singular: "person",
    label_field: "name",
    construct: construct::<Person>,
};

static FILMS: ResourceEntry = ResourceEntry {
    kind: ResourceKind::Film,
    path: "films",
    singular: "film",
    label_field: "title",
    construct: construct::<Film>,
};

fn construct<R: Resource>(item: JsonObject) -> Result<Record> {
    R::from_json(item).map(Into::into)
}

/// Registry entry for a kind
pub fn entry(kind: ResourceKind) -> &'static ResourceEntry {
    match kind {
        ResourceKind::Person => &PEOPLE,
        ResourceKind::Film => &FILMS,
    }
}

/// All registry entries
pub fn entries() -> impl Iterator<Item = &'static ResourceEntry> {
    ResourceKind::ALL.into_iter().map(entry)
}

/// Record constructor for a kind
pub fn constructor_for(kind: ResourceKind) -> RecordConstructor {
    entry(kind).construct
}

/// Endpoint the page fetcher should hit for a kind
pub fn fetcher_for(kind: ResourceKind) -> Endpoint {
    let entry = entry(kind);
    Endpoint {
        kind: entry.kind,
        path: entry.path,
    }
}

/// Resolve a kind from its path or singular name, case-insensitively
pub fn kind_for_name(name: &str) -> Option<ResourceKind> {
    let name = name.trim();
    entries()
        .find(|entry| entry.path.eq_ignore_ascii_case(name) || entry.singular.eq_ignore_ascii_case(name))
        .map(|entry| entry.kind)
}

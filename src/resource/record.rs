//! Typed resource records
//!
//! Each record promotes the attributes callers rely on (identifier and
//! display label) to typed fields and keeps everything else in an `extra`
//! map. Records are immutable once built and compare by identifier.

use super::kind::ResourceKind;
use super::registry;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use url::Url;

/// A typed record of one resource kind
pub trait Resource: Sized + Into<Record> + TryFrom<Record, Error = Error> {
    /// Kind tag of this record type
    const KIND: ResourceKind;

    /// Build the record from one decoded item
    fn from_json(item: JsonObject) -> Result<Self>;

    /// Remote identifier
    fn id(&self) -> u32;

    /// Display label (name, title, ...)
    fn label(&self) -> &str;

    /// Attributes not promoted to typed fields
    fn extra(&self) -> &JsonObject;
}

// ============================================================================
// Person
// ============================================================================

/// A character from `/people/`
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Resource for Person {
    const KIND: ResourceKind = ResourceKind::Person;

    fn from_json(mut item: JsonObject) -> Result<Self> {
        let id = take_id(Self::KIND, &mut item)?;
        let name = take_label(Self::KIND, &mut item)?;
        Ok(Self {
            id,
            name,
            extra: item,
        })
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn extra(&self) -> &JsonObject {
        &self.extra
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person: {}", self.name)
    }
}

// ============================================================================
// Film
// ============================================================================

/// A film from `/films/`
#[derive(Debug, Clone, Serialize)]
pub struct Film {
    pub id: u32,
    pub title: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Resource for Film {
    const KIND: ResourceKind = ResourceKind::Film;

    fn from_json(mut item: JsonObject) -> Result<Self> {
        let id = take_id(Self::KIND, &mut item)?;
        let title = take_label(Self::KIND, &mut item)?;
        Ok(Self {
            id,
            title,
            extra: item,
        })
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn extra(&self) -> &JsonObject {
        &self.extra
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Film: {}", self.title)
    }
}

// Identity is the remote id; attribute drift between fetches does not matter.
macro_rules! impl_identity {
    ($($ty:ty),*) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }
    )*};
}

impl_identity!(Person, Film);

// ============================================================================
// Record
// ============================================================================

/// Any record produced by a query, tagged by kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Record {
    Person(Person),
    Film(Film),
}

impl Record {
    /// Kind of the wrapped record
    pub fn kind(&self) -> ResourceKind {
        match self {
            Record::Person(_) => ResourceKind::Person,
            Record::Film(_) => ResourceKind::Film,
        }
    }

    /// Remote identifier
    pub fn id(&self) -> u32 {
        match self {
            Record::Person(p) => p.id(),
            Record::Film(f) => f.id(),
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        match self {
            Record::Person(p) => p.label(),
            Record::Film(f) => f.label(),
        }
    }

    /// Attributes not promoted to typed fields
    pub fn extra(&self) -> &JsonObject {
        match self {
            Record::Person(p) => p.extra(),
            Record::Film(f) => f.extra(),
        }
    }

    /// Look up an unpromoted attribute
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.extra().get(key)
    }

    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Record::Person(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_film(&self) -> Option<&Film> {
        match self {
            Record::Film(f) => Some(f),
            _ => None,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Person(p) => fmt::Display::fmt(p, f),
            Record::Film(film) => fmt::Display::fmt(film, f),
        }
    }
}

impl From<Person> for Record {
    fn from(person: Person) -> Self {
        Record::Person(person)
    }
}

impl From<Film> for Record {
    fn from(film: Film) -> Self {
        Record::Film(film)
    }
}

impl TryFrom<Record> for Person {
    type Error = Error;

    fn try_from(record: Record) -> Result<Self> {
        match record {
            Record::Person(p) => Ok(p),
            other => Err(kind_mismatch(Self::KIND, other.kind())),
        }
    }
}

impl TryFrom<Record> for Film {
    type Error = Error;

    fn try_from(record: Record) -> Result<Self> {
        match record {
            Record::Film(f) => Ok(f),
            other => Err(kind_mismatch(Self::KIND, other.kind())),
        }
    }
}

fn kind_mismatch(expected: ResourceKind, found: ResourceKind) -> Error {
    Error::decode(format!("expected a {} record, got {}", expected.singular(), found.singular()))
}

// ============================================================================
// Attribute extraction
// ============================================================================

/// Remove and return the identifier.
///
/// Prefers an explicit `id` attribute; SWAPI items carry none, so fall back
/// to the last path segment of their `url` (`.../people/1/`).
fn take_id(kind: ResourceKind, item: &mut JsonObject) -> Result<u32> {
    if let Some(value) = item.remove("id") {
        return parse_id(&value).ok_or_else(|| {
            Error::decode(format!("{} has an invalid id: {value}", kind.singular()))
        });
    }

    item.get("url")
        .and_then(JsonValue::as_str)
        .and_then(id_from_url)
        .ok_or_else(|| Error::decode(format!("{} item has no id or url", kind.singular())))
}

fn parse_id(value: &JsonValue) -> Option<u32> {
    match value {
        JsonValue::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn id_from_url(url: &str) -> Option<u32> {
    let url = Url::parse(url).ok()?;
    url.path_segments()?
        .rev()
        .find(|segment| !segment.is_empty())?
        .parse()
        .ok()
}

/// Remove and return the kind's display label attribute
fn take_label(kind: ResourceKind, item: &mut JsonObject) -> Result<String> {
    let field = registry::entry(kind).label_field;
    match item.remove(field) {
        Some(JsonValue::String(label)) => Ok(label),
        Some(other) => Err(Error::decode(format!(
            "{} field '{field}' is not a string: {other}",
            kind.singular()
        ))),
        None => Err(Error::decode(format!(
            "{} item is missing '{field}'",
            kind.singular()
        ))),
    }
}

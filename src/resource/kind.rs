//! Resource kind tag

use super::registry;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The remote entity types this client models
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum ResourceKind {
    /// A character (`/people/`)
    #[serde(rename = "people")]
    #[value(name = "people", alias = "person")]
    Person,
    /// A film (`/films/`)
    #[serde(rename = "films")]
    #[value(name = "films", alias = "film")]
    Film,
}

impl ResourceKind {
    /// Every registered kind, in registry order
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Person, ResourceKind::Film];

    /// API path segment for this kind (e.g. `people`)
    pub fn path(self) -> &'static str {
        registry::entry(self).path
    }

    /// Singular, human-facing name (e.g. `person`)
    pub fn singular(self) -> &'static str {
        registry::entry(self).singular
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        registry::kind_for_name(s).ok_or_else(|| {
            Error::config(format!(
                "unknown resource kind '{s}' (expected one of: {})",
                registry::entries()
                    .map(|entry| entry.path)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
    }
}

//! Header snapshot production.
//!
//! # Responsibilities
//! - Flatten the request's header collection into an ordered name → value map
//! - Merge repeated headers with the standard `", "` joining rule
//! - Produce a plain-data copy via a serialize/deserialize round trip
//!
//! # Design Decisions
//! - Keys are the lowercased names `HeaderMap` already normalizes to
//! - Values decoded lossily; header enumeration never fails locally
//! - The snapshot is built once per request and never mutated afterwards

use axum::http::HeaderMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from header name to header value, decoupled from the
/// live request it was taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderSnapshot {
    entries: IndexMap<String, String>,
}

impl HeaderSnapshot {
    /// Number of distinct header names captured.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a header by its lowercased name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Header names in capture order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate (name, value) pairs in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Force a plain-data copy by round-tripping through JSON text.
    ///
    /// The resulting value contains only string keys and string values and
    /// is safe to embed in a rendered page's data payload. Serializing a
    /// string map cannot fail, so this is infallible.
    pub fn into_plain_data(self) -> serde_json::Value {
        let text = serde_json::to_string(&self.entries).unwrap_or_else(|_| "{}".to_string());
        serde_json::from_str(&text).unwrap_or(serde_json::Value::Object(Default::default()))
    }
}

/// Snapshot the headers visible on an incoming request.
///
/// Enumerates the header collection in order; a name carrying multiple
/// values is collapsed to a single entry with the values joined by `", "`.
pub fn snapshot(headers: &HeaderMap) -> HeaderSnapshot {
    let mut entries: IndexMap<String, String> = IndexMap::with_capacity(headers.len());

    for (name, value) in headers.iter() {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match entries.entry(name.as_str().to_string()) {
            indexmap::map::Entry::Occupied(mut existing) => {
                let joined = existing.get_mut();
                joined.push_str(", ");
                joined.push_str(&value);
            }
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }

    HeaderSnapshot { entries }
}

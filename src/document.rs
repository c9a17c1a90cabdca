//! Mutable key-value document abstraction.
//!
//! An ingested document is a mapping from string keys to arbitrary JSON
//! values. The document is owned by the caller and mutated in place by
//! processors; collision semantics are last-write-wins.

use serde_json::{Map, Value};
use thiserror::Error;

/// Error converting a JSON value into a [`Document`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("document root must be a JSON object")]
pub struct NotAnObject;

/// A mutable ingest document.
///
/// Wraps a `serde_json::Map` and exposes the get/set/remove operations
/// processors need. `set` overwrites any existing value under the same key
/// (last-write-wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Inserts or overwrites the value under `key`.
    ///
    /// Returns the previous value if the key already existed.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    /// Removes and returns the value stored under `key`, if any.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    /// Returns `true` if the document contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrows the underlying field map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the document, returning the underlying field map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for Document {
    type Error = NotAnObject;

    /// Converts a JSON value into a document.
    ///
    /// # Errors
    ///
    /// Returns [`NotAnObject`] if the value is not a JSON object.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(NotAnObject),
        }
    }
}

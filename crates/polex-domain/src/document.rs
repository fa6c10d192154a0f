//! Document module - the nested record produced by extraction

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A nested mapping addressed by dotted logical paths.
///
/// Leaf values are JSON values: string, integer, float, list of strings, or
/// null. A `Document` is created fresh per extraction request, mutated only
/// during the parse-and-fill pass, and treated as immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Create a document from an existing JSON object
    ///
    /// Returns `None` if the value is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Assign a value at a dotted path, creating intermediate objects as
    /// needed. An existing value at the path is overwritten (last write
    /// wins). An intermediate segment holding a non-object value is
    /// replaced by an object.
    pub fn set_path(&mut self, path: &str, value: Value) {
        let mut segments = path.split('.').peekable();
        let mut current = &mut self.0;

        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                current.insert(segment.to_string(), value);
                return;
            }

            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            current = entry.as_object_mut().expect("entry forced to object");
        }
    }

    /// Look up the value at a dotted path
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;

        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Whether the path resolves to a value that is present and non-null
    pub fn has_value(&self, path: &str) -> bool {
        matches!(self.get_path(path), Some(v) if !v.is_null())
    }

    /// Remove the value at a dotted path, returning it if it was present
    pub fn remove_path(&mut self, path: &str) -> Option<Value> {
        let (parent, leaf) = match path.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, path),
        };

        match parent {
            None => self.0.remove(leaf),
            Some(parent) => {
                let container = self.get_path_mut(parent)?.as_object_mut()?;
                container.remove(leaf)
            }
        }
    }

    /// Mutable lookup at a dotted path
    pub fn get_path_mut(&mut self, path: &str) -> Option<&mut Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get_mut(first)?;

        for segment in segments {
            current = current.as_object_mut()?.get_mut(segment)?;
        }
        Some(current)
    }

    /// Ensure an object exists at the given dotted path without disturbing
    /// an existing one
    pub fn ensure_object(&mut self, path: &str) {
        if !matches!(self.get_path(path), Some(Value::Object(_))) {
            self.set_path(path, Value::Object(Map::new()));
        }
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// View the document as a JSON value
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Consume the document into a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

//! Opaque JSON document and batch types
//!
//! Documents carry arbitrary caller content; nothing here inspects or
//! validates that content beyond requiring it to be a JSON object. Identity
//! within a request is positional (the document's index in the batch).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// An ordered batch of documents from one request body, in source order
pub type Batch = Vec<Document>;

/// One object-shaped JSON document
///
/// The newtype deserializes transparently from a JSON object, so a batch
/// element of any other shape (number, string, array, null) fails at parse
/// time with serde's position-annotated cause.
///
/// # Examples
///
/// ```
/// use hopper::domain::Document;
///
/// let doc: Document = serde_json::from_str(r#"{"name": "widget", "qty": 3}"#).unwrap();
/// assert_eq!(doc.string_field("name"), Some("widget"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Wraps an already-parsed JSON object
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Returns the underlying object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Number of top-level members
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the document has no members
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the top-level member `name` when it is a string
    pub fn string_field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Assigns a generated UUID `id` member when none is present
    ///
    /// Cosmos DB requires every item to carry a string `id`; callers are not
    /// obliged to provide one. An existing `id` of any type is left alone.
    pub fn ensure_id(&mut self) {
        if !self.0.contains_key("id") {
            self.0.insert(
                "id".to_string(),
                Value::String(Uuid::new_v4().to_string()),
            );
        }
    }
}

impl fmt::Display for Document {
    /// Compact JSON rendering, used when logging a failed insert's content
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(json) => f.write_str(&json),
            Err(_) => f.write_str("<unserializable document>"),
        }
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_deserializes_from_object() {
        let d = doc(json!({"a": 1, "b": "two"}));
        assert_eq!(d.len(), 2);
        assert_eq!(d.string_field("b"), Some("two"));
    }

    #[test]
    fn test_rejects_non_object_shapes() {
        assert!(serde_json::from_value::<Document>(json!(42)).is_err());
        assert!(serde_json::from_value::<Document>(json!("scalar")).is_err());
        assert!(serde_json::from_value::<Document>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<Document>(json!(null)).is_err());
    }

    #[test]
    fn test_string_field_ignores_non_strings() {
        let d = doc(json!({"qty": 3}));
        assert_eq!(d.string_field("qty"), None);
        assert_eq!(d.string_field("missing"), None);
    }

    #[test]
    fn test_ensure_id_fills_missing_id() {
        let mut d = doc(json!({"name": "widget"}));
        d.ensure_id();
        let id = d.string_field("id").expect("id assigned");
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn test_ensure_id_keeps_existing_id() {
        let mut d = doc(json!({"id": "item-7"}));
        d.ensure_id();
        assert_eq!(d.string_field("id"), Some("item-7"));

        // A non-string id is preserved too, not replaced.
        let mut d = doc(json!({"id": 7}));
        d.ensure_id();
        assert_eq!(d.as_map().get("id"), Some(&json!(7)));
    }

    #[test]
    fn test_display_is_compact_json() {
        let d = doc(json!({"a": 1}));
        assert_eq!(d.to_string(), r#"{"a":1}"#);
    }

    #[test]
    fn test_serializes_back_to_object() {
        let d = doc(json!({"nested": {"x": [1, 2, 3]}}));
        let round: Value = serde_json::to_value(&d).unwrap();
        assert_eq!(round, json!({"nested": {"x": [1, 2, 3]}}));
    }
}

//! Data models for schema-tote
//!
//! An [`Entry`] is one element of a loaded entries file: a wrapper object with
//! optional `id`, `tags`, `type` and a nested schema.org-style `schema`.
//! Entries are kept as open JSON so unknown schema fields survive untouched;
//! the accessors below give typed views of the conventional fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the schema-level identifier inside `schema`
pub const SCHEMA_ID_KEY: &str = "@id";
/// Key of the schema-level type inside `schema`
pub const SCHEMA_TYPE_KEY: &str = "@type";

/// A single loaded entry
///
/// Accessors return `None` when a field is missing or holds an unexpected
/// JSON type. An element that is not an object at all is still an entry, it
/// just never matches anything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Entry(Value);

impl Entry {
    /// Wrap a parsed JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Top-level `id`
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Top-level `type` (a coarse category, not the schema `@type`)
    pub fn entry_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// String elements of `tags`, or `None` if `tags` is not an array
    pub fn tags(&self) -> Option<Vec<&str>> {
        self.0
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
    }

    /// Whether `tags` contains `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags()
            .map(|tags| tags.iter().any(|t| t.to_lowercase() == wanted))
            .unwrap_or(false)
    }

    /// The nested `schema` object
    pub fn schema(&self) -> Option<&Map<String, Value>> {
        self.0.get("schema").and_then(Value::as_object)
    }

    /// `schema["@id"]` when it is a string
    pub fn schema_id(&self) -> Option<&str> {
        self.schema()
            .and_then(|s| s.get(SCHEMA_ID_KEY))
            .and_then(Value::as_str)
    }

    /// `schema["@type"]` when it is a string
    pub fn schema_type(&self) -> Option<&str> {
        self.schema()
            .and_then(|s| s.get(SCHEMA_TYPE_KEY))
            .and_then(Value::as_str)
    }

    /// Minimal `{@type, @id}` reference to this entry's schema
    pub fn schema_ref(&self) -> Option<SchemaRef> {
        self.schema().map(SchemaRef::from_schema)
    }

    /// Borrow the raw JSON
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the entry, returning the raw JSON
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Minimal projection of a schema: just its `@type` and `@id`
///
/// Both values are copied as they appear in the schema, whatever their JSON
/// type. A missing key stays `None` and is left out when serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SchemaRef {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<Value>,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl SchemaRef {
    /// Create a reference from string `@type` and `@id`
    pub fn new(schema_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            schema_type: Some(Value::String(schema_type.into())),
            id: Some(Value::String(id.into())),
        }
    }

    /// Project a schema object
    pub fn from_schema(schema: &Map<String, Value>) -> Self {
        Self {
            schema_type: schema.get(SCHEMA_TYPE_KEY).cloned(),
            id: schema.get(SCHEMA_ID_KEY).cloned(),
        }
    }
}

//! Schema types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema type tag of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
    /// Fallback produced when array elements disagree on their type
    Any,
}

impl SchemaType {
    /// Classify a JSON value
    ///
    /// Never returns [`SchemaType::Any`]; that tag only comes out of merging.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => SchemaType::Null,
            Value::Bool(_) => SchemaType::Boolean,
            Value::Number(_) => SchemaType::Number,
            Value::String(_) => SchemaType::String,
            Value::Array(_) => SchemaType::Array,
            Value::Object(_) => SchemaType::Object,
        }
    }

    /// Whether nodes of this type hold children instead of a value
    pub fn is_container(self) -> bool {
        matches!(self, SchemaType::Object | SchemaType::Array)
    }

    /// Lowercase name as used in type expressions
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Null => "null",
            SchemaType::Any => "any",
        }
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the inferred schema tree
///
/// `children` is only meaningful for containers and `value` only for leaves.
/// `is_optional`, `original_key` and `type_override` are filled in by the
/// modification overlay (and `is_optional` by array merging).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// Path-derived identity, stable across re-inference
    pub id: String,

    /// Display name: property name, array index, `root` or `item`
    pub key: String,

    /// Inferred type tag
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    /// Ordered child schemas (objects and arrays)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SchemaNode>,

    /// Original scalar sample (leaves only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Key may be absent
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_optional: bool,

    /// Key before a rename was applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_key: Option<String>,

    /// Free-form type expression replacing the inferred type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_override: Option<String>,
}

impl SchemaNode {
    /// Create a leaf node carrying a sample value
    pub fn leaf(id: impl Into<String>, key: impl Into<String>, value: Value) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            schema_type: SchemaType::of(&value),
            children: Vec::new(),
            value: Some(value),
            is_optional: false,
            original_key: None,
            type_override: None,
        }
    }

    /// Create a container node
    pub fn container(
        id: impl Into<String>,
        key: impl Into<String>,
        schema_type: SchemaType,
        children: Vec<SchemaNode>,
    ) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            schema_type,
            children,
            value: None,
            is_optional: false,
            original_key: None,
            type_override: None,
        }
    }

    /// Create the `any` fallback node (no children, no value)
    pub fn any(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self::container(id, key, SchemaType::Any, Vec::new())
    }

    /// Non-empty type override, if any
    ///
    /// An empty override string is the "cleared" state and is ignored.
    pub fn effective_override(&self) -> Option<&str> {
        self.type_override.as_deref().filter(|t| !t.is_empty())
    }

    /// Get a direct child by key
    pub fn child(&self, key: &str) -> Option<&SchemaNode> {
        self.children.iter().find(|c| c.key == key)
    }

    /// Element schema of an array node
    pub fn item(&self) -> Option<&SchemaNode> {
        if self.schema_type == SchemaType::Array {
            self.children.first()
        } else {
            None
        }
    }

    /// Find a node anywhere in the subtree by id
    pub fn find(&self, id: &str) -> Option<&SchemaNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Visit every node in pre-order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a SchemaNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

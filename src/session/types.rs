//! Session types and the render pipeline

use crate::codegen::{
    default_value_for_type_expr, to_default_value_literal, to_form_stub, to_hook_stub,
    to_typescript, to_zod_schema,
};
use crate::config::GeneratorConfig;
use crate::editor;
use crate::error::{Error, Result};
use crate::overlay::{apply_modifications, SchemaModifications};
use crate::schema::{infer_schema, SchemaNode, SchemaType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type names that clear an override instead of setting one
const STANDARD_TYPES: &[&str] = &[
    "string", "number", "boolean", "null", "undefined", "object", "array",
];

/// Sample value given to children created by `Session::add_child`
const NEW_CHILD_VALUE: &str = "string";

/// Document text plus the user's schema edits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Raw JSON document text
    #[serde(default)]
    pub json: String,

    /// Edits keyed by node id
    #[serde(default)]
    pub modifications: SchemaModifications,
}

/// Generated text for every target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifacts {
    pub typescript: String,
    pub zod: String,
    pub query_hook: String,
    pub form_hook: String,
    pub default_values: String,
}

impl Artifacts {
    /// Whether nothing was generated (empty input)
    pub fn is_empty(&self) -> bool {
        self.typescript.is_empty()
    }
}

/// On-disk form of a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(flatten)]
    pub session: Session,

    /// Last time the session was written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Start a session from document text
    pub fn new(json: impl Into<String>) -> Self {
        Self {
            json: json.into(),
            modifications: SchemaModifications::new(),
        }
    }

    /// Attach existing modifications
    #[must_use]
    pub fn with_modifications(mut self, modifications: SchemaModifications) -> Self {
        self.modifications = modifications;
        self
    }

    /// Whether there is no document
    pub fn is_empty(&self) -> bool {
        self.json.trim().is_empty()
    }

    /// Parse the document text (`None` when empty)
    pub fn parse_document(&self) -> Result<Option<Value>> {
        if self.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&self.json)?))
    }

    /// Freshly inferred tree without edits
    pub fn raw_tree(&self) -> Result<Option<SchemaNode>> {
        Ok(self.parse_document()?.map(|value| infer_schema(&value)))
    }

    /// Inferred tree with edits applied
    pub fn effective_tree(&self) -> Result<Option<SchemaNode>> {
        Ok(self
            .raw_tree()?
            .map(|tree| apply_modifications(&tree, &self.modifications)))
    }

    /// Run the full pipeline and generate every target
    ///
    /// Empty input yields empty artifacts; malformed input is a parse error.
    pub fn render(&self, config: &GeneratorConfig) -> Result<Artifacts> {
        let Some(tree) = self.effective_tree()? else {
            return Ok(Artifacts::default());
        };

        let root_name = config.root_name.as_str();
        let artifacts = Artifacts {
            typescript: to_typescript(&tree, root_name, &config.typescript_options()),
            zod: to_zod_schema(&tree, &config.zod_options()),
            query_hook: to_hook_stub(root_name),
            form_hook: to_form_stub(&tree, root_name),
            default_values: to_default_value_literal(&tree),
        };
        tracing::debug!(root_name, edits = self.modifications.len(), "Rendered artifacts");
        Ok(artifacts)
    }

    // ------------------------------------------------------------------------
    // Schema edits (recorded in the modification map)
    // ------------------------------------------------------------------------

    /// Flip the optional flag of a node, returning the new state
    pub fn toggle_optional(&mut self, id: &str) -> bool {
        self.modifications.toggle_optional(id)
    }

    /// Rename a node; blank names are rejected
    pub fn rename(&mut self, id: &str, new_key: &str) -> Result<()> {
        let new_key = new_key.trim();
        if new_key.is_empty() {
            return Err(Error::edit(id, "new key cannot be empty"));
        }
        self.modifications.rename(id, new_key);
        Ok(())
    }

    /// Change the type of a node
    ///
    /// The sample value is replaced with one matching the new type when one
    /// can be derived. Standard JSON type names clear the override, since
    /// the new sample value already infers to that type.
    pub fn override_type(&mut self, id: &str, type_expr: &str) {
        if let Some(value) = default_value_for_type_expr(type_expr) {
            self.json = editor::update_node_value(&self.json, id, value);
        }

        let stored = if STANDARD_TYPES.contains(&type_expr.trim()) {
            ""
        } else {
            type_expr
        };
        self.modifications.set_type_override(id, stored);
    }

    // ------------------------------------------------------------------------
    // Structural edits (applied to the document text)
    // ------------------------------------------------------------------------

    /// Add a child with a generated `newField` key under a container node
    ///
    /// Returns the key used. Array nodes get an element appended instead.
    /// The new child is seeded with the string `"string"`.
    pub fn add_child(&mut self, id: &str) -> Result<String> {
        let tree = self
            .effective_tree()?
            .ok_or_else(|| Error::node_not_found(id))?;
        let node = tree.find(id).ok_or_else(|| Error::node_not_found(id))?;

        // `any` may still sit on a container in the text; the editor decides
        if !node.schema_type.is_container() && node.schema_type != SchemaType::Any {
            return Err(Error::edit(
                id,
                format!("cannot add a child to a {} node", node.schema_type),
            ));
        }

        let key = editor::next_child_key(node.children.iter().map(|c| c.key.as_str()));
        let updated = editor::add_node(&self.json, id, &key, Value::String(NEW_CHILD_VALUE.into()));
        if updated == self.json {
            return Err(Error::edit(id, "target is not a container"));
        }

        self.json = updated;
        Ok(key)
    }

    /// Add `key: value` under the container at `path`
    pub fn add_node(&mut self, path: &str, key: &str, value: Value) {
        self.json = editor::add_node(&self.json, path, key, value);
    }

    /// Remove the node at `path`
    pub fn remove_node(&mut self, path: &str) {
        self.json = editor::remove_node(&self.json, path);
    }

    /// Replace the value at `path`
    pub fn update_value(&mut self, path: &str, value: Value) {
        self.json = editor::update_node_value(&self.json, path, value);
    }
}

//! Overlay types
//!
//! These types are serialized to JSON and persisted by the embedding
//! application alongside the document text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Partial edit record for a single node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeModification {
    /// Overrides the merge-derived optional flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_optional: Option<bool>,

    /// Display key replacing the inferred one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renamed_key: Option<String>,

    /// Free-form type expression; an empty string clears a prior override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_override: Option<String>,
}

impl NodeModification {
    /// Whether the record carries no edit at all
    pub fn is_empty(&self) -> bool {
        self.is_optional.is_none() && self.renamed_key.is_none() && self.type_override.is_none()
    }
}

/// Sparse map from node id to its edits
///
/// Entries are never pruned automatically. Ids that no longer match any
/// node are inert until the path exists again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaModifications {
    entries: BTreeMap<String, NodeModification>,
}

impl SchemaModifications {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from the persisted JSON form
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the persisted JSON form
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Get the edits recorded for a node
    pub fn get(&self, id: &str) -> Option<&NodeModification> {
        self.entries.get(id)
    }

    /// Get or create the edit record for a node
    pub fn entry(&mut self, id: &str) -> &mut NodeModification {
        self.entries.entry(id.to_string()).or_default()
    }

    /// Replace the edit record for a node
    pub fn insert(&mut self, id: impl Into<String>, modification: NodeModification) {
        self.entries.insert(id.into(), modification);
    }

    /// Flip the optional flag of a node (unset counts as required)
    pub fn toggle_optional(&mut self, id: &str) -> bool {
        let entry = self.entry(id);
        let optional = entry.is_optional != Some(true);
        entry.is_optional = Some(optional);
        optional
    }

    /// Set the optional flag of a node
    pub fn set_optional(&mut self, id: &str, optional: bool) {
        self.entry(id).is_optional = Some(optional);
    }

    /// Record a rename
    pub fn rename(&mut self, id: &str, new_key: impl Into<String>) {
        self.entry(id).renamed_key = Some(new_key.into());
    }

    /// Record a type override (empty string clears it)
    pub fn set_type_override(&mut self, id: &str, type_expr: impl Into<String>) {
        self.entry(id).type_override = Some(type_expr.into());
    }

    /// Drop every edit recorded for a node
    pub fn clear(&mut self, id: &str) -> Option<NodeModification> {
        self.entries.remove(id)
    }

    /// Number of nodes with edits
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no edits are recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(id, edits)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &NodeModification)> {
        self.entries.iter()
    }
}

impl FromIterator<(String, NodeModification)> for SchemaModifications {
    fn from_iter<I: IntoIterator<Item = (String, NodeModification)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

//! Overlay application

use super::types::SchemaModifications;
use crate::schema::SchemaNode;

/// Apply stored edits over a freshly inferred tree
///
/// Returns a new tree; the input is left untouched. Each entry affects only
/// the node whose id it names.
pub fn apply_modifications(tree: &SchemaNode, mods: &SchemaModifications) -> SchemaNode {
    let effective = apply_node(tree, mods);
    tracing::debug!(entries = mods.len(), "Applied schema modifications");
    effective
}

fn apply_node(node: &SchemaNode, mods: &SchemaModifications) -> SchemaNode {
    let mut out = SchemaNode {
        children: Vec::new(),
        ..node.clone()
    };

    if let Some(edit) = mods.get(&node.id) {
        if let Some(optional) = edit.is_optional {
            out.is_optional = optional;
        }
        if let Some(renamed) = &edit.renamed_key {
            // keep the pre-rename key from inference, never an earlier overlay's output
            if out.original_key.is_none() {
                out.original_key = Some(out.key.clone());
            }
            out.key.clone_from(renamed);
        }
        if let Some(type_expr) = &edit.type_override {
            out.type_override = Some(type_expr.clone());
        }
    }

    out.children = node
        .children
        .iter()
        .map(|child| apply_node(child, mods))
        .collect();
    out
}

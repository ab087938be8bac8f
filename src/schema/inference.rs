//! Schema inference from JSON values

use super::path::{NodePath, ROOT};
use super::types::{SchemaNode, SchemaType};
use serde_json::Value;

/// Key given to the merged element schema of an array
pub const ITEM_KEY: &str = "item";

/// Infer the schema tree of a whole document (convenience function)
pub fn infer_schema(value: &Value) -> SchemaNode {
    let tree = infer_schema_at(value, &NodePath::root());
    tracing::debug!(root_type = %tree.schema_type, "Inferred schema tree");
    tree
}

/// Infer the schema of a value located at `path`
///
/// The node key is derived from the last path step: the member name, the
/// array index, or `root`.
pub fn infer_schema_at(value: &Value, path: &NodePath) -> SchemaNode {
    infer_node(value, path, key_of(path))
}

fn infer_node(value: &Value, path: &NodePath, key: String) -> SchemaNode {
    match value {
        Value::Object(map) => {
            let children = map
                .iter()
                .map(|(k, v)| infer_node(v, &path.child(k), k.clone()))
                .collect();
            SchemaNode::container(path.as_str(), key, SchemaType::Object, children)
        }
        Value::Array(items) => {
            let children = infer_array_item(items, path).into_iter().collect();
            SchemaNode::container(path.as_str(), key, SchemaType::Array, children)
        }
        scalar => SchemaNode::leaf(path.as_str(), key, scalar.clone()),
    }
}

/// Fold every element schema into one representative item schema
fn infer_array_item(items: &[Value], path: &NodePath) -> Option<SchemaNode> {
    let mut item = items
        .iter()
        .enumerate()
        .map(|(index, v)| infer_node(v, &path.index(index), index.to_string()))
        .reduce(|acc, next| merge_schemas(&acc, &next))?;

    item.key = ITEM_KEY.to_string();
    Some(item)
}

/// Merge two schemas describing samples of the same position
///
/// - different types collapse to `any` without children
/// - objects take the ordered union of keys, recursively merging shared keys
///   and marking one-sided keys optional
/// - any other matching type keeps `a`
pub fn merge_schemas(a: &SchemaNode, b: &SchemaNode) -> SchemaNode {
    if a.schema_type != b.schema_type {
        tracing::debug!(
            id = %a.id,
            left = %a.schema_type,
            right = %b.schema_type,
            "Type conflict while merging, falling back to any"
        );
        let mut merged = SchemaNode::any(a.id.as_str(), a.key.as_str());
        merged.is_optional = a.is_optional;
        return merged;
    }

    if a.schema_type != SchemaType::Object {
        return a.clone();
    }

    let mut children = Vec::with_capacity(a.children.len().max(b.children.len()));

    for a_child in &a.children {
        match b.child(&a_child.key) {
            Some(b_child) => children.push(merge_schemas(a_child, b_child)),
            None => children.push(optional(a_child)),
        }
    }

    for b_child in &b.children {
        if a.child(&b_child.key).is_none() {
            children.push(optional(b_child));
        }
    }

    let mut merged = a.clone();
    merged.children = children;
    merged
}

fn optional(node: &SchemaNode) -> SchemaNode {
    let mut node = node.clone();
    node.is_optional = true;
    node
}

/// Key of the node at `path`, derived from its last step
fn key_of(path: &NodePath) -> String {
    let last = path.as_str().rsplit('.').next().unwrap_or(ROOT);

    if let Some(open) = last.rfind('[') {
        if last.ends_with(']') {
            return last[open + 1..last.len() - 1].to_string();
        }
    }

    last.to_string()
}

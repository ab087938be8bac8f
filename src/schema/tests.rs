//! Schema inference tests

use super::*;
use serde_json::json;

fn ids(node: &SchemaNode) -> Vec<(String, String, SchemaType)> {
    let mut out = Vec::new();
    node.walk(&mut |n| out.push((n.id.clone(), n.key.clone(), n.schema_type)));
    out
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_classify_values() {
    assert_eq!(SchemaType::of(&json!(null)), SchemaType::Null);
    assert_eq!(SchemaType::of(&json!(true)), SchemaType::Boolean);
    assert_eq!(SchemaType::of(&json!(1.5)), SchemaType::Number);
    assert_eq!(SchemaType::of(&json!(3)), SchemaType::Number);
    assert_eq!(SchemaType::of(&json!("x")), SchemaType::String);
    assert_eq!(SchemaType::of(&json!([])), SchemaType::Array);
    assert_eq!(SchemaType::of(&json!({})), SchemaType::Object);
}

#[test]
fn test_schema_type_display() {
    assert_eq!(SchemaType::Any.to_string(), "any");
    assert_eq!(SchemaType::Object.to_string(), "object");
}

// ============================================================================
// Inference
// ============================================================================

#[test]
fn test_infer_simple_object() {
    let value = json!({
        "name": "John",
        "age": 30,
        "active": true
    });

    let schema = infer_schema(&value);

    assert_eq!(schema.id, "root");
    assert_eq!(schema.key, "root");
    assert_eq!(schema.schema_type, SchemaType::Object);
    assert!(schema.value.is_none());

    let keys: Vec<_> = schema.children.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["name", "age", "active"]);

    let name = schema.child("name").unwrap();
    assert_eq!(name.id, "root.name");
    assert_eq!(name.schema_type, SchemaType::String);
    assert_eq!(name.value, Some(json!("John")));
    assert!(!name.is_optional);

    assert_eq!(schema.child("age").unwrap().schema_type, SchemaType::Number);
    assert_eq!(schema.child("active").unwrap().schema_type, SchemaType::Boolean);
}

#[test]
fn test_infer_preserves_key_order() {
    let value: serde_json::Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
    let schema = infer_schema(&value);

    let keys: Vec<_> = schema.children.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_infer_nested_object() {
    let value = json!({
        "user": {
            "name": "John",
            "address": { "city": "Seoul" }
        }
    });

    let schema = infer_schema(&value);
    let city = schema.find("root.user.address.city").unwrap();
    assert_eq!(city.key, "city");
    assert_eq!(city.value, Some(json!("Seoul")));
}

#[test]
fn test_infer_null_leaf() {
    let schema = infer_schema(&json!({ "deleted_at": null }));
    let node = schema.child("deleted_at").unwrap();
    assert_eq!(node.schema_type, SchemaType::Null);
    assert_eq!(node.value, Some(json!(null)));
}

#[test]
fn test_infer_scalar_root() {
    let schema = infer_schema(&json!(42));
    assert_eq!(schema.id, "root");
    assert_eq!(schema.schema_type, SchemaType::Number);
    assert_eq!(schema.value, Some(json!(42)));
    assert!(schema.children.is_empty());
}

#[test]
fn test_infer_empty_containers() {
    let schema = infer_schema(&json!({ "tags": [], "meta": {} }));

    let tags = schema.child("tags").unwrap();
    assert_eq!(tags.schema_type, SchemaType::Array);
    assert!(tags.children.is_empty());
    assert!(tags.value.is_none());

    let meta = schema.child("meta").unwrap();
    assert_eq!(meta.schema_type, SchemaType::Object);
    assert!(meta.children.is_empty());
}

#[test]
fn test_infer_array_single_item_schema() {
    let value = json!({
        "items": [
            {"id": 1, "name": "Item 1"},
            {"id": 2, "name": "Item 2"},
            {"id": 3, "name": "Item 3"}
        ]
    });

    let schema = infer_schema(&value);
    let items = schema.child("items").unwrap();
    assert_eq!(items.children.len(), 1);

    let item = items.item().unwrap();
    assert_eq!(item.key, ITEM_KEY);
    assert_eq!(item.id, "root.items[0]");
    assert_eq!(item.child("id").unwrap().id, "root.items[0].id");
    // first element wins for primitives
    assert_eq!(item.child("name").unwrap().value, Some(json!("Item 1")));
}

#[test]
fn test_infer_one_element_array_uses_placeholder_key() {
    let schema = infer_schema(&json!({ "tags": ["a"] }));
    let item = schema.child("tags").unwrap().item().unwrap();
    assert_eq!(item.key, "item");
    assert_eq!(item.id, "root.tags[0]");
    assert_eq!(item.schema_type, SchemaType::String);
}

#[test]
fn test_infer_root_array() {
    let schema = infer_schema(&json!([{ "a": 1 }, { "a": 2 }]));
    assert_eq!(schema.schema_type, SchemaType::Array);
    let item = schema.item().unwrap();
    assert_eq!(item.id, "root[0]");
    assert_eq!(item.child("a").unwrap().id, "root[0].a");
}

#[test]
fn test_infer_nested_arrays() {
    let schema = infer_schema(&json!({ "grid": [[1, 2], [3]] }));
    let outer = schema.child("grid").unwrap().item().unwrap();
    assert_eq!(outer.schema_type, SchemaType::Array);
    assert_eq!(outer.id, "root.grid[0]");
    let inner = outer.item().unwrap();
    assert_eq!(inner.id, "root.grid[0][0]");
    assert_eq!(inner.key, "item");
}

#[test]
fn test_infer_at_derives_key_from_path() {
    let path = NodePath::root().child("list").index(4);
    let node = infer_schema_at(&json!("x"), &path);
    assert_eq!(node.id, "root.list[4]");
    assert_eq!(node.key, "4");

    let node = infer_schema_at(&json!(1), &NodePath::root().child("count"));
    assert_eq!(node.key, "count");
}

#[test]
fn test_inference_is_deterministic() {
    let value = json!({
        "users": [{"id": 1, "tags": ["a"]}, {"id": 2, "email": "x@y.z"}],
        "meta": {"page": 1}
    });

    assert_eq!(ids(&infer_schema(&value)), ids(&infer_schema(&value)));
}

#[test]
fn test_ids_stable_across_scalar_changes() {
    let a = json!({ "user": { "name": "Ann", "tags": ["x"] } });
    let b = json!({ "user": { "name": "Bob", "tags": ["y"] } });

    assert_eq!(ids(&infer_schema(&a)), ids(&infer_schema(&b)));
}

#[test]
fn test_ids_are_unique() {
    let value = json!({
        "a": {"b": [{"c": 1}, {"d": 2}]},
        "b": [1, 2],
        "c": null
    });
    let tree = infer_schema(&value);
    let all = ids(&tree);
    let unique: std::collections::HashSet<_> = all.iter().map(|(id, _, _)| id).collect();
    assert_eq!(unique.len(), all.len());
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn test_merge_marks_missing_keys_optional() {
    let schema = infer_schema(&json!([{ "a": 1, "b": 2 }, { "a": 3 }]));
    let item = schema.item().unwrap();

    assert!(!item.child("a").unwrap().is_optional);
    assert!(item.child("b").unwrap().is_optional);
}

#[test]
fn test_merge_appends_new_keys_in_first_seen_order() {
    let schema = infer_schema(&json!([{ "a": 1 }, { "c": 1, "a": 2, "b": 3 }]));
    let item = schema.item().unwrap();

    let keys: Vec<_> = item.children.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "c", "b"]);
    assert!(!item.child("a").unwrap().is_optional);
    assert!(item.child("c").unwrap().is_optional);
    assert!(item.child("b").unwrap().is_optional);
    assert_eq!(item.child("b").unwrap().id, "root[1].b");
}

#[test]
fn test_merge_type_conflict_falls_back_to_any() {
    let schema = infer_schema(&json!([{ "a": 1 }, { "a": "x" }]));
    let a = schema.item().unwrap().child("a").unwrap();

    assert_eq!(a.schema_type, SchemaType::Any);
    assert!(a.children.is_empty());
    assert!(a.value.is_none());
}

#[test]
fn test_merge_conflicting_elements_collapse_item() {
    let schema = infer_schema(&json!({ "mixed": [1, {"a": 1}] }));
    let item = schema.child("mixed").unwrap().item().unwrap();
    assert_eq!(item.schema_type, SchemaType::Any);
    assert_eq!(item.key, "item");
    assert!(item.children.is_empty());
}

#[test]
fn test_merge_nested_objects_recursively() {
    let schema = infer_schema(&json!([
        { "user": { "name": "a" } },
        { "user": { "name": "b", "age": 3 } }
    ]));
    let user = schema.item().unwrap().child("user").unwrap();
    assert!(!user.is_optional);
    assert!(!user.child("name").unwrap().is_optional);
    assert!(user.child("age").unwrap().is_optional);
}

#[test]
fn test_merge_arrays_keep_first() {
    let a = infer_schema(&json!([1]));
    let b = infer_schema(&json!(["x"]));
    let merged = merge_schemas(&a, &b);
    assert_eq!(merged, a);
}

#[test]
fn test_merge_same_primitive_keeps_first_value() {
    let a = infer_schema(&json!("first"));
    let b = infer_schema(&json!("second"));
    assert_eq!(merge_schemas(&a, &b).value, Some(json!("first")));
}

#[test]
fn test_serialize_node_camel_case() {
    let schema = infer_schema(&json!([{ "a": 1 }, {}]));
    let json = serde_json::to_value(&schema).unwrap();
    assert_eq!(json["type"], "array");
    assert_eq!(json["children"][0]["children"][0]["isOptional"], true);
    assert!(json.get("value").is_none());
}

#[test]
fn test_dotted_key_shares_id_with_nested_path() {
    // ids are not escaped; a literal "a.b" key collides with a -> b
    let schema = infer_schema(&json!({ "a.b": 1, "a": { "b": 2 } }));
    let all: Vec<String> = ids(&schema).into_iter().map(|(id, _, _)| id).collect();
    assert_eq!(all, vec!["root", "root.a.b", "root.a", "root.a.b"]);
    assert_eq!(schema.find("root.a.b").unwrap().key, "a.b");
}

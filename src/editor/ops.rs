//! Edit operations on JSON text

use crate::error::{Error, Result};
use crate::schema::{NodePath, PathSegment};
use serde_json::{Map, Value};

/// Base key used when adding a child without a name
pub const NEW_FIELD_KEY: &str = "newField";

/// Add `key: value` to the container at `path`
///
/// Objects get the key set (overwriting an existing one in place); arrays get
/// `value` appended and `key` is ignored. Empty text starts from `{}`.
pub fn add_node(json: &str, path: &str, key: &str, value: Value) -> String {
    fail_soft(json, path, "add", || {
        let mut data = if json.trim().is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_str(json)?
        };

        let segments = parse_path(path)?;
        let target = walk_mut(&mut data, &segments, path)?;
        match target {
            Value::Object(map) => {
                map.insert(key.to_string(), value);
            }
            Value::Array(items) => items.push(value),
            _ => return Err(Error::edit(path, "target is not a container")),
        }

        render(&data)
    })
}

/// Remove the node at `path`
///
/// `root` resets the document to an empty object.
pub fn remove_node(json: &str, path: &str) -> String {
    if json.trim().is_empty() {
        return json.to_string();
    }

    fail_soft(json, path, "remove", || {
        let mut data: Value = serde_json::from_str(json)?;
        if NodePath::new(path).is_root() {
            return Ok("{}".to_string());
        }

        let (parent_path, last) = split_last(path)?;
        let parent = walk_mut(&mut data, &parent_path, path)?;

        match (parent, &last) {
            (Value::Object(map), PathSegment::Key(key)) => {
                map.shift_remove(key)
                    .ok_or_else(|| Error::edit(path, format!("no member '{key}'")))?;
            }
            (Value::Array(items), PathSegment::Index(index)) if *index < items.len() => {
                items.remove(*index);
            }
            _ => return Err(Error::edit(path, "target not found")),
        }

        render(&data)
    })
}

/// Replace the value at `path`
///
/// `root` replaces the whole document. Object members are created when
/// missing; array indices must exist.
pub fn update_node_value(json: &str, path: &str, new_value: Value) -> String {
    if json.trim().is_empty() {
        return json.to_string();
    }

    fail_soft(json, path, "update", || {
        let mut data: Value = serde_json::from_str(json)?;
        if NodePath::new(path).is_root() {
            return render(&new_value);
        }

        let (parent_path, last) = split_last(path)?;
        let parent = walk_mut(&mut data, &parent_path, path)?;

        match (parent, &last) {
            (Value::Object(map), PathSegment::Key(key)) => {
                map.insert(key.clone(), new_value);
            }
            (Value::Array(items), PathSegment::Index(index)) => {
                let slot = items
                    .get_mut(*index)
                    .ok_or_else(|| Error::edit(path, format!("index {index} out of bounds")))?;
                *slot = new_value;
            }
            _ => return Err(Error::edit(path, "parent does not match path segment")),
        }

        render(&data)
    })
}

/// Next free key for a new child: `newField`, then `newField_{n+1}`
///
/// `n` is the highest numeric suffix already in use.
pub fn next_child_key<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    let prefix = format!("{NEW_FIELD_KEY}_");
    let mut has_base = false;
    let mut max_counter = 0u128;

    for key in existing {
        if key == NEW_FIELD_KEY {
            has_base = true;
        } else if let Some(n) = key.strip_prefix(&prefix).and_then(|s| s.parse::<u128>().ok()) {
            max_counter = max_counter.max(n);
        }
    }

    if has_base || max_counter > 0 {
        format!("{prefix}{}", max_counter.saturating_add(1))
    } else {
        NEW_FIELD_KEY.to_string()
    }
}

fn fail_soft(json: &str, path: &str, op: &str, edit: impl FnOnce() -> Result<String>) -> String {
    match edit() {
        Ok(out) => out,
        Err(e) => {
            tracing::warn!(path, op, error = %e, "Dropping structural edit");
            json.to_string()
        }
    }
}

fn parse_path(path: &str) -> Result<Vec<PathSegment>> {
    NodePath::parse(path).ok_or_else(|| Error::edit(path, "malformed path"))
}

fn split_last(path: &str) -> Result<(Vec<PathSegment>, PathSegment)> {
    let mut segments = parse_path(path)?;
    let last = segments
        .pop()
        .ok_or_else(|| Error::edit(path, "path has no target"))?;
    Ok((segments, last))
}

fn walk_mut<'a>(data: &'a mut Value, segments: &[PathSegment], path: &str) -> Result<&'a mut Value> {
    let mut current = data;
    for segment in segments {
        current = match (current, segment) {
            (Value::Object(map), PathSegment::Key(key)) => map
                .get_mut(key)
                .ok_or_else(|| Error::edit(path, format!("no member '{key}'")))?,
            (Value::Array(items), PathSegment::Index(index)) => items
                .get_mut(*index)
                .ok_or_else(|| Error::edit(path, format!("index {index} out of bounds")))?,
            (_, PathSegment::Key(key)) => {
                return Err(Error::edit(path, format!("cannot access '{key}' on a non-object")))
            }
            (_, PathSegment::Index(index)) => {
                return Err(Error::edit(path, format!("cannot index [{index}] on a non-array")))
            }
        };
    }
    Ok(current)
}

fn render(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

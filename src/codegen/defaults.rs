//! Default-value literal generator

use super::ident::{indent, quote_key, string_literal};
use crate::schema::{SchemaNode, SchemaType};
use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;

/// Leading string literal of a literal union: `"active" | ...`
static STRING_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"([^"]+)""#).unwrap());

/// Render a literal expression matching the tree's structure
///
/// Leaves use their captured sample value; nodes without one fall back to
/// the value implied by their type override, then to a zero value of their
/// inferred type.
pub fn to_default_value_literal(tree: &SchemaNode) -> String {
    literal_at(tree, 0)
}

/// Literal for a node whose first line sits at nesting `level`
pub(crate) fn literal_at(node: &SchemaNode, level: usize) -> String {
    if let Some(value) = &node.value {
        return render_value(value, level);
    }

    if let Some(value) = node.effective_override().and_then(default_value_for_type_expr) {
        return render_value(&value, level);
    }

    match node.schema_type {
        SchemaType::Object if node.children.is_empty() => "{}".to_string(),
        SchemaType::Object => {
            let props: Vec<String> = node
                .children
                .iter()
                .map(|child| {
                    format!(
                        "{}{}: {},",
                        indent(level + 1),
                        quote_key(&child.key),
                        literal_at(child, level + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{}}}", props.join("\n"), indent(level))
        }
        SchemaType::Array => match node.item() {
            Some(item) => format!(
                "[\n{}{},\n{}]",
                indent(level + 1),
                literal_at(item, level + 1),
                indent(level)
            ),
            None => "[]".to_string(),
        },
        SchemaType::String => "\"\"".to_string(),
        SchemaType::Number => "0".to_string(),
        SchemaType::Boolean => "false".to_string(),
        SchemaType::Null | SchemaType::Any => "null".to_string(),
    }
}

/// Render a JSON value as a JavaScript literal
fn render_value(value: &Value, level: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => string_literal(s),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let lines: Vec<String> = items
                .iter()
                .map(|v| format!("{}{},", indent(level + 1), render_value(v, level + 1)))
                .collect();
            format!("[\n{}\n{}]", lines.join("\n"), indent(level))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let lines: Vec<String> = map
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}{}: {},",
                        indent(level + 1),
                        quote_key(k),
                        render_value(v, level + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{}}}", lines.join("\n"), indent(level))
        }
    }
}

/// Sample value implied by a type expression, if one can be derived
///
/// Basic type names map to zero values (`Date` to the current timestamp),
/// literal unions to their first member.
pub fn default_value_for_type_expr(type_expr: &str) -> Option<Value> {
    let type_expr = type_expr.trim();

    if let Some(value) = basic_default(type_expr) {
        return Some(value);
    }

    if let Some(caps) = STRING_LITERAL_REGEX.captures(type_expr) {
        return Some(Value::String(caps[1].to_string()));
    }

    let first = type_expr.split('|').next().unwrap_or_default().trim();
    match first {
        "" => None,
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        _ => number_literal(first).or_else(|| basic_default(first)),
    }
}

fn basic_default(type_name: &str) -> Option<Value> {
    match type_name {
        "string" => Some(Value::String(String::new())),
        "number" => Some(Value::from(0)),
        "boolean" => Some(Value::Bool(false)),
        "null" | "any" | "undefined" => Some(Value::Null),
        "object" => Some(Value::Object(serde_json::Map::new())),
        "array" => Some(Value::Array(Vec::new())),
        "Date" => Some(Value::String(
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        )),
        _ => None,
    }
}

fn number_literal(s: &str) -> Option<Value> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::from(i));
    }
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
        .map(Value::Number)
}

//! Identifier helpers shared by every generator

use regex::Regex;
use std::sync::LazyLock;

/// Bare JavaScript identifier (ASCII subset)
static IDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*$").unwrap());

/// Whether `key` can be written without quotes
pub fn is_identifier(key: &str) -> bool {
    IDENT_REGEX.is_match(key)
}

/// Key as written in an object type or literal
pub fn quote_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        string_literal(key)
    }
}

/// Property access on `target`: `target.key` or `target["key"]`
pub fn member_access(target: &str, key: &str) -> String {
    if is_identifier(key) {
        format!("{target}.{key}")
    } else {
        format!("{target}[{}]", string_literal(key))
    }
}

/// Double-quoted, escaped string literal
pub fn string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

/// `snake_case` to `camelCase`; other keys pass through
///
/// Leading underscores are kept (`_id` stays `_id`).
pub fn snake_to_camel(key: &str) -> String {
    let trimmed = key.trim_start_matches('_');
    let prefix = &key[..key.len() - trimmed.len()];

    let mut out = String::with_capacity(key.len());
    out.push_str(prefix);
    let mut upper_next = false;
    for c in trimmed.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    if upper_next {
        out.push('_');
    }
    out
}

/// PascalCase type name from an arbitrary key
///
/// Falls back to `fallback` when nothing usable remains, and prefixes `T`
/// when the name would start with a digit.
pub fn type_name(key: &str, fallback: &str) -> String {
    let name: String = key
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect();

    if name.is_empty() {
        fallback.to_string()
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("T{name}")
    } else {
        name
    }
}

/// Uppercase the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Indentation for a nesting level (two spaces per level)
pub fn indent(level: usize) -> String {
    "  ".repeat(level)
}

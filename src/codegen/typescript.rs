//! TypeScript declaration generator

use super::ident::{indent, quote_key, snake_to_camel, type_name};
use super::types::{DeclarationStyle, TypeScriptOptions};
use crate::schema::{SchemaNode, SchemaType};
use std::collections::HashSet;

/// Generate TypeScript declarations for a schema tree
///
/// The root is declared as `root_name`. With `separate_nested`, every
/// non-empty nested object (and object array element) gets its own
/// declaration, emitted before the declaration that uses it.
pub fn to_typescript(tree: &SchemaNode, root_name: &str, options: &TypeScriptOptions) -> String {
    let mut emitter = Emitter {
        options,
        declarations: Vec::new(),
        used_names: HashSet::from([root_name.to_string()]),
    };

    let root = emitter.declaration(root_name, tree);
    emitter.declarations.push(root);
    emitter.declarations.join("\n\n")
}

struct Emitter<'a> {
    options: &'a TypeScriptOptions,
    declarations: Vec<String>,
    used_names: HashSet<String>,
}

impl Emitter<'_> {
    fn declaration(&mut self, name: &str, node: &SchemaNode) -> String {
        if node.effective_override().is_none() && node.schema_type == SchemaType::Object {
            let body = self.object_body(node, 1);
            return match self.options.declaration {
                DeclarationStyle::Interface => format!("export interface {name} {body}"),
                DeclarationStyle::Type => format!("export type {name} = {body};"),
            };
        }

        let expr = self.type_expr(node, name, 1);
        format!("export type {name} = {expr};")
    }

    fn type_expr(&mut self, node: &SchemaNode, hint: &str, level: usize) -> String {
        if let Some(type_expr) = node.effective_override() {
            return type_expr.to_string();
        }

        match node.schema_type {
            SchemaType::Object if node.children.is_empty() => "{}".to_string(),
            SchemaType::Object if self.options.separate_nested => {
                let name = self.unique_name(&type_name(hint, "Nested"));
                let body = self.object_body(node, 1);
                let declaration = match self.options.declaration {
                    DeclarationStyle::Interface => format!("export interface {name} {body}"),
                    DeclarationStyle::Type => format!("export type {name} = {body};"),
                };
                self.declarations.push(declaration);
                name
            }
            SchemaType::Object => self.object_body(node, level),
            SchemaType::Array => match node.item() {
                Some(item) => {
                    let inner = self.type_expr(item, &format!("{hint}Item"), level);
                    if has_top_level_operator(&inner) {
                        format!("({inner})[]")
                    } else {
                        format!("{inner}[]")
                    }
                }
                None => "any[]".to_string(),
            },
            SchemaType::String => "string".to_string(),
            SchemaType::Number => "number".to_string(),
            SchemaType::Boolean => "boolean".to_string(),
            SchemaType::Null => "null".to_string(),
            SchemaType::Any => "any".to_string(),
        }
    }

    fn object_body(&mut self, node: &SchemaNode, level: usize) -> String {
        let mut props = Vec::with_capacity(node.children.len());

        for child in &node.children {
            let key = self.display_key(child);
            let optional = if child.is_optional { "?" } else { "" };
            let ty = self.type_expr(child, &key, level + 1);
            props.push(format!("{}{}{optional}: {ty};", indent(level), quote_key(&key)));
        }

        format!("{{\n{}\n{}}}", props.join("\n"), indent(level - 1))
    }

    fn display_key(&self, node: &SchemaNode) -> String {
        if self.options.camel_case {
            snake_to_camel(&node.key)
        } else {
            node.key.clone()
        }
    }

    fn unique_name(&mut self, base: &str) -> String {
        let mut name = base.to_string();
        let mut counter = 2;
        while self.used_names.contains(&name) {
            name = format!("{base}{counter}");
            counter += 1;
        }
        self.used_names.insert(name.clone());
        name
    }
}

/// Whether a type expression has a `|` or `&` outside of any brackets or
/// string literals, so that `[]` would bind to its last member only
fn has_top_level_operator(expr: &str) -> bool {
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut prev = ' ';

    for c in expr.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' | '`' => quote = Some(c),
                // arrow `=>`, not a closing angle bracket
                '>' if prev == '=' => {}
                '{' | '[' | '(' | '<' => depth += 1,
                '}' | ']' | ')' | '>' => depth -= 1,
                '|' | '&' if depth == 0 => return true,
                _ => {}
            },
        }
        prev = c;
    }
    false
}

//! Zod schema generator

use super::ident::{indent, member_access, quote_key, snake_to_camel};
use super::types::ZodOptions;
use crate::schema::{SchemaNode, SchemaType};

/// Generate a Zod module exporting the schema as `options.schema_name`
pub fn to_zod_schema(tree: &SchemaNode, options: &ZodOptions) -> String {
    format!(
        "import {{ z }} from \"zod\";\n\nexport const {} = {};",
        options.schema_name,
        to_zod_expression(tree, 0, options.camel_case)
    )
}

/// Zod validator expression for a node, indented for nesting `level`
pub fn to_zod_expression(node: &SchemaNode, level: usize, camel_case: bool) -> String {
    let mut schema = match node.effective_override() {
        Some(type_expr) => format!("z.custom<{type_expr}>()"),
        None => match node.schema_type {
            SchemaType::Object => object_expression(node, level, camel_case),
            SchemaType::Array => match node.item() {
                Some(item) => format!("z.array({})", to_zod_expression(item, level, camel_case)),
                None => "z.array(z.any())".to_string(),
            },
            SchemaType::String => "z.string()".to_string(),
            SchemaType::Number => "z.number()".to_string(),
            SchemaType::Boolean => "z.boolean()".to_string(),
            SchemaType::Null => "z.null()".to_string(),
            SchemaType::Any => "z.any()".to_string(),
        },
    };

    if node.is_optional {
        schema.push_str(".optional()");
    }
    schema
}

fn object_expression(node: &SchemaNode, level: usize, camel_case: bool) -> String {
    if node.children.is_empty() {
        return "z.object({})".to_string();
    }

    let inner = indent(level + 1);
    let props: Vec<String> = node
        .children
        .iter()
        .map(|child| {
            format!(
                "{inner}{}: {},",
                quote_key(&child.key),
                to_zod_expression(child, level + 1, camel_case)
            )
        })
        .collect();

    let mut schema = format!("z.object({{\n{}\n{}}})", props.join("\n"), indent(level));

    if camel_case && node.children.iter().any(|c| snake_to_camel(&c.key) != c.key) {
        let mappings: Vec<String> = node
            .children
            .iter()
            .map(|child| {
                format!(
                    "{inner}{}: {},",
                    quote_key(&snake_to_camel(&child.key)),
                    member_access("data", &child.key)
                )
            })
            .collect();
        schema.push_str(&format!(
            ".transform((data) => ({{\n{}\n{}}}))",
            mappings.join("\n"),
            indent(level)
        ));
    }

    schema
}

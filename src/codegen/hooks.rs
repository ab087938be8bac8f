//! Data-fetching and form-binding hook stubs

use super::defaults::literal_at;
use super::schema_name_for;
use crate::schema::SchemaNode;
use crate::template::{render_optional, TemplateContext};

const QUERY_HOOK_TEMPLATE: &str = r#"import { useQuery } from "@tanstack/react-query";
import { {{ root_name }} } from "./types";

export function use{{ root_name }}() {
  return useQuery<{{ root_name }}>({
    queryKey: ["{{ query_key }}"],
    queryFn: async () => {
      const response = await fetch("/api/{{ query_key }}");
      if (!response.ok) {
        throw new Error("Network response was not ok");
      }
      return response.json();
    },
  });
}"#;

const FORM_HOOK_TEMPLATE: &str = r#"import { useForm } from "react-hook-form";
import { zodResolver } from "@hookform/resolvers/zod";
import { {{ schema_name }} } from "./schemas";
import { {{ root_name }} } from "./types";

export function use{{ root_name }}Form() {
  return useForm<{{ root_name }}>({
    resolver: zodResolver({{ schema_name }}),
    defaultValues: {{ default_values }},
  });
}"#;

/// Data-fetching hook for the root type
pub fn to_hook_stub(root_name: &str) -> String {
    let ctx = TemplateContext::new()
        .with("root_name", root_name)
        .with("query_key", root_name.to_lowercase());
    render_optional(QUERY_HOOK_TEMPLATE, &ctx)
}

/// Form-binding hook for the root type, seeded with default values
pub fn to_form_stub(tree: &SchemaNode, root_name: &str) -> String {
    let ctx = TemplateContext::new()
        .with("root_name", root_name)
        .with("schema_name", schema_name_for(root_name))
        .with("default_values", literal_at(tree, 2));
    render_optional(FORM_HOOK_TEMPLATE, &ctx)
}

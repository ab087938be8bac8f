//! Template interpolation for generated stubs
//!
//! Handles `{{ variable }}` placeholders in the hook/form stub templates.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable }}
static TEMPLATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").unwrap());

/// Variables available to a template
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Builder-style variant of [`TemplateContext::set`]
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

/// Render a template, leaving undefined variables as-is
///
/// Substituted text is never re-scanned for placeholders.
pub fn render_optional(template: &str, ctx: &TemplateContext) -> String {
    TEMPLATE_REGEX
        .replace_all(template, |cap: &Captures<'_>| {
            ctx.get(&cap[1]).map_or_else(|| cap[0].to_string(), ToString::to_string)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let ctx = TemplateContext::new().with("name", "Root");
        assert_eq!(render_optional("use{{ name }}()", &ctx), "useRoot()");
    }

    #[test]
    fn test_multiple_substitutions() {
        let ctx = TemplateContext::new().with("a", "x").with("b", "y");
        assert_eq!(render_optional("{{ a }}/{{ b }}/{{ a }}", &ctx), "x/y/x");
    }

    #[test]
    fn test_undefined_variable_left_in_place() {
        let ctx = TemplateContext::new().with("key", "value");
        assert_eq!(render_optional("test {{ key }}", &ctx), "test value");
        assert_eq!(render_optional("test {{ missing }}", &ctx), "test {{ missing }}");
    }

    #[test]
    fn test_substituted_text_not_rescanned() {
        let ctx = TemplateContext::new().with("a", "{{ b }}").with("b", "oops");
        assert_eq!(render_optional("{{ a }}", &ctx), "{{ b }}");
    }

    #[test]
    fn test_single_braces_are_plain_text() {
        let ctx = TemplateContext::new().with("t", "Root");
        assert_eq!(
            render_optional("useQuery<{{ t }}>({ queryKey: [] })", &ctx),
            "useQuery<Root>({ queryKey: [] })"
        );
    }

    #[test]
    fn test_whitespace_in_template() {
        let ctx = TemplateContext::new().with("key", "value");
        assert_eq!(render_optional("{{key}}", &ctx), "value");
        assert_eq!(render_optional("{{  key  }}", &ctx), "value");
    }

    #[test]
    fn test_set_overwrites() {
        let mut ctx = TemplateContext::new();
        ctx.set("k", "1").set("k", "2");
        assert_eq!(ctx.get("k"), Some("2"));
        assert_eq!(ctx.get("other"), None);
    }
}

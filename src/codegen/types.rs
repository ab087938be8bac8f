//! Generator options

use serde::{Deserialize, Serialize};

/// How a TypeScript declaration is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationStyle {
    /// `export interface Name { ... }`
    #[default]
    Interface,
    /// `export type Name = { ... };`
    Type,
}

impl std::str::FromStr for DeclarationStyle {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "interface" => Ok(Self::Interface),
            "type" => Ok(Self::Type),
            other => Err(crate::Error::invalid_value(
                "declaration",
                format!("expected 'interface' or 'type', got '{other}'"),
            )),
        }
    }
}

/// TypeScript generator options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeScriptOptions {
    /// Declaration keyword
    pub declaration: DeclarationStyle,
    /// Hoist nested object types into their own declarations
    pub separate_nested: bool,
    /// Emit `snake_case` keys as `camelCase`
    pub camel_case: bool,
}

impl TypeScriptOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declaration style
    #[must_use]
    pub fn with_declaration(mut self, declaration: DeclarationStyle) -> Self {
        self.declaration = declaration;
        self
    }

    /// Enable/disable hoisting of nested types
    #[must_use]
    pub fn with_separate_nested(mut self, enabled: bool) -> Self {
        self.separate_nested = enabled;
        self
    }

    /// Enable/disable camelCase keys
    #[must_use]
    pub fn with_camel_case(mut self, enabled: bool) -> Self {
        self.camel_case = enabled;
        self
    }
}

/// Zod generator options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZodOptions {
    /// Name of the exported schema constant
    pub schema_name: String,
    /// Re-key `snake_case` members to `camelCase` with a `.transform` step
    pub camel_case: bool,
}

impl Default for ZodOptions {
    fn default() -> Self {
        Self {
            schema_name: super::schema_name_for("Root"),
            camel_case: false,
        }
    }
}

impl ZodOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exported schema name
    #[must_use]
    pub fn with_schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = name.into();
        self
    }

    /// Enable/disable the camelCase transform
    #[must_use]
    pub fn with_camel_case(mut self, enabled: bool) -> Self {
        self.camel_case = enabled;
        self
    }
}

//! Generator configuration
//!
//! Output settings shared by every generator, loadable from YAML:
//!
//! ```yaml
//! root_name: User
//! declaration: type
//! separate_nested: true
//! camel_case: false
//! ```
//!
//! Every field has a default, so an empty document is a valid config.

use crate::codegen::{ident, schema_name_for, DeclarationStyle, TypeScriptOptions, ZodOptions};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for one render of all generator targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name of the root type (`Root`)
    pub root_name: String,

    /// TypeScript declaration keyword
    pub declaration: DeclarationStyle,

    /// Hoist nested object types into named declarations
    pub separate_nested: bool,

    /// Convert `snake_case` keys to `camelCase`
    pub camel_case: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            declaration: DeclarationStyle::default(),
            separate_nested: false,
            camel_case: false,
        }
    }
}

fn default_root_name() -> String {
    "Root".to_string()
}

impl GeneratorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root type name
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Set the TypeScript declaration keyword
    #[must_use]
    pub fn with_declaration(mut self, declaration: DeclarationStyle) -> Self {
        self.declaration = declaration;
        self
    }

    /// Enable/disable nested type hoisting
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

    /// Options for the TypeScript generator
    pub fn typescript_options(&self) -> TypeScriptOptions {
        TypeScriptOptions::new()
            .with_declaration(self.declaration)
            .with_separate_nested(self.separate_nested)
            .with_camel_case(self.camel_case)
    }

    /// Options for the Zod generator
    pub fn zod_options(&self) -> ZodOptions {
        ZodOptions::new()
            .with_schema_name(schema_name_for(&self.root_name))
            .with_camel_case(self.camel_case)
    }

    /// Check that the settings produce valid output
    pub fn validate(&self) -> Result<()> {
        if !ident::is_identifier(&self.root_name) {
            return Err(Error::invalid_value(
                "root_name",
                format!("'{}' is not a valid identifier", self.root_name),
            ));
        }
        Ok(())
    }
}

/// Load generator configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<GeneratorConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load generator configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<GeneratorConfig> {
    let config: GeneratorConfig = if yaml.trim().is_empty() {
        GeneratorConfig::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.root_name, "Root");
        assert_eq!(config.declaration, DeclarationStyle::Interface);
        assert!(!config.separate_nested);
        assert!(!config.camel_case);
        assert_eq!(config.zod_options().schema_name, "rootSchema");
    }

    #[test]
    fn test_load_empty_document() {
        assert_eq!(load_config_from_str("").unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn test_load_full_document() {
        let yaml = r"
root_name: User
declaration: type
separate_nested: true
camel_case: true
";
        let config = load_config_from_str(yaml).unwrap();
        assert_eq!(config.root_name, "User");
        assert_eq!(config.declaration, DeclarationStyle::Type);

        let ts = config.typescript_options();
        assert!(ts.separate_nested);
        assert!(ts.camel_case);

        let zod = config.zod_options();
        assert_eq!(zod.schema_name, "userSchema");
        assert!(zod.camel_case);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = load_config_from_str("camel_case: true").unwrap();
        assert_eq!(config.root_name, "Root");
        assert!(config.camel_case);
    }

    #[test]
    fn test_invalid_root_name() {
        let err = load_config_from_str("root_name: my-type").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = load_config_from_str("declaration: [oops").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_unknown_declaration_style() {
        assert!(load_config_from_str("declaration: class").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("typedloom.yaml");
        std::fs::write(&path, "root_name: Order\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.root_name, "Order");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("/nonexistent/typedloom.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}

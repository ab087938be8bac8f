//! Error types for Typedloom
//!
//! The inference engine, overlay and generators are total and never fail.
//! Errors only arise at the boundaries: parsing text, loading configuration,
//! persisting sessions, and inside the structural editor (where they are
//! logged and swallowed).

use thiserror::Error;

/// The main error type for Typedloom
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Parse Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    // ============================================================================
    // Editing Errors
    // ============================================================================
    #[error("Cannot edit '{path}': {message}")]
    Edit { path: String, message: String },

    #[error("Node '{id}' not found in schema tree")]
    NodeNotFound { id: String },

    // ============================================================================
    // Session Errors
    // ============================================================================
    #[error("Session error: {message}")]
    Session { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a structural edit error
    pub fn edit(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Edit {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a node-not-found error
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    /// Create a session error
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    /// Whether this error came from malformed input text
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::JsonParse(_) | Error::YamlParse(_))
    }
}

/// Result type alias for Typedloom
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::edit("root.a", "no member 'a'");
        assert_eq!(err.to_string(), "Cannot edit 'root.a': no member 'a'");

        let err = Error::invalid_value("root_name", "must be an identifier");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'root_name': must be an identifier"
        );

        let err = Error::node_not_found("root.x");
        assert_eq!(err.to_string(), "Node 'root.x' not found in schema tree");
    }

    #[test]
    fn test_is_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(Error::from(json_err).is_parse_error());
        assert!(!Error::session("x").is_parse_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}

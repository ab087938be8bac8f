//! Code generation module
//!
//! Pure tree-to-text transforms over an effective schema tree.
//!
//! # Targets
//!
//! - **TypeScript**: nested or hoisted `interface`/`type` declarations
//! - **Zod**: validator expressions, optional camelCase re-keying
//! - **Default values**: literal seeded from captured sample values
//! - **Stubs**: data-fetching hook and form-binding hook
//!
//! Every generator honors `is_optional` and substitutes a node's type
//! override verbatim instead of recursing into it.

mod defaults;
mod hooks;
pub mod ident;
mod types;
mod typescript;
mod zod;

pub use defaults::{default_value_for_type_expr, to_default_value_literal};
pub use hooks::{to_form_stub, to_hook_stub};
pub use types::{DeclarationStyle, TypeScriptOptions, ZodOptions};
pub use typescript::to_typescript;
pub use zod::{to_zod_expression, to_zod_schema};

/// Conventional Zod schema constant name for a root type (`Root` -> `rootSchema`)
pub fn schema_name_for(root_name: &str) -> String {
    format!("{}Schema", ident::lower_first(root_name))
}

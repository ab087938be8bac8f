// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Typedloom
//!
//! Turn a sample JSON document into typed client code, and edit both the
//! document and its inferred schema without losing track of which node is
//! which.
//!
//! ## Features
//!
//! - **Schema Inference**: Recursive type tree from any JSON value, with
//!   array elements merged into one representative item
//! - **Stable Node Ids**: Path-based ids (`root.items[0].name`) that survive
//!   re-inference
//! - **Modification Overlay**: Renames, optional flags and type overrides
//!   kept apart from the tree and re-applied after every change
//! - **Structural Editor**: Add, remove and replace values in JSON text by id
//! - **Code Generation**: TypeScript, Zod, default-value literals, query and
//!   form hook stubs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use typedloom::{GeneratorConfig, Session};
//!
//! let mut session = Session::new(r#"{ "user_name": "ann", "age": 30 }"#);
//! session.rename("root.user_name", "name")?;
//! session.toggle_optional("root.age");
//!
//! let artifacts = session.render(&GeneratorConfig::default())?;
//! println!("{}", artifacts.typescript);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   infer    ┌─────────────┐   overlay   ┌────────────────┐
//! │  JSON text   │ ─────────▶ │  Raw tree   │ ──────────▶ │ Effective tree │
//! └──────────────┘            └─────────────┘             └────────────────┘
//!        ▲                                                        │
//!        │ editor (add / remove / update)                         ▼
//!        │                                   ┌──────────┬──────────┬──────────┐
//!   node ids  ◀────────────────────────────  │TypeScript│   Zod    │ Defaults │
//!                                            │          │          │  Hooks   │
//!                                            └──────────┴──────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Schema tree, node identity and inference
pub mod schema;

/// User edits layered over inferred trees
pub mod overlay;

/// Structural edits on JSON text
pub mod editor;

/// TypeScript, Zod, default-value and hook generators
pub mod codegen;

/// Document + edits, render pipeline and persistence
pub mod session;

/// Generator configuration
pub mod config;

/// Template interpolation
pub mod template;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, GeneratorConfig};
pub use overlay::{apply_modifications, NodeModification, SchemaModifications};
pub use schema::{infer_schema, merge_schemas, SchemaNode, SchemaType};
pub use session::{Artifacts, Session, SessionStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

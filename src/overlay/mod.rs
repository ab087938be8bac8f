//! Modification overlay module
//!
//! User edits (optional flag, rename, type override) are stored sparsely by
//! node id and replayed over every freshly inferred schema tree.
//!
//! # Overview
//!
//! - `NodeModification` - Partial edit record for one node
//! - `SchemaModifications` - Id-keyed map of edits, persisted as a flat record
//! - `apply_modifications` - Produces the effective tree from a fresh one

mod apply;
mod types;

pub use apply::apply_modifications;
pub use types::{NodeModification, SchemaModifications};

//! Structural editor module
//!
//! Applies add/remove/update edits directly to serialized JSON text, so the
//! next inference pass picks them up. Paths use the same grammar as schema
//! node ids (see [`crate::schema::path`]).
//!
//! All operations are fail-soft: malformed text or an unreachable path
//! yields the original text back and a `warn` log entry.

mod ops;

pub use ops::{add_node, next_child_key, remove_node, update_node_value, NEW_FIELD_KEY};

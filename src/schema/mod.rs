//! Schema inference module
//!
//! Infers a structural schema tree from arbitrary JSON values.
//!
//! # Features
//!
//! - **Type Classification**: Maps every JSON value to a [`SchemaType`] tag
//! - **Stable Identity**: Every node carries a path-derived id (`root.user.tags[0]`)
//! - **Array Merging**: Heterogeneous array elements fold into one element schema
//! - **Optional Detection**: Keys missing from some array elements become optional

mod inference;
pub mod path;
mod types;

pub use inference::{infer_schema, infer_schema_at, merge_schemas, ITEM_KEY};
pub use path::{NodePath, PathSegment, ROOT};
pub use types::{SchemaNode, SchemaType};

#[cfg(test)]
mod tests;

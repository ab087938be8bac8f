//! Session module
//!
//! A session is the only state an embedding application has to keep: the
//! JSON text and the modification map. Everything else is re-derived from
//! them on every change.
//!
//! # Overview
//!
//! - `Session` - Document + edits, the full render pipeline and edit actions
//! - `Artifacts` - Generated text for every target
//! - `SessionStore` - File-based persistence with atomic writes

mod store;
mod types;

pub use store::SessionStore;
pub use types::{Artifacts, Session, SessionFile};


#[cfg(test)]
mod store_tests;

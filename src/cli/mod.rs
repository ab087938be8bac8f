//! CLI module
//!
//! Command-line interface over the inference and generation pipeline.
//!
//! # Commands
//!
//! - `generate` - Render one or all generator targets
//! - `infer` - Print the effective schema tree as JSON
//! - `add` / `remove` / `set` - Structural edits on a JSON file
//! - `modify` - Record optional/rename/type edits in a modifications file
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, Target};
pub use runner::Runner;
pub use server::{app, serve, ServerConfig};

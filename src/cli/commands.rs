//! CLI commands and argument parsing

use crate::codegen::DeclarationStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Typedloom CLI
#[derive(Parser, Debug)]
#[command(name = "typedloom")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generator configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Modifications file (JSON map of node id to edits)
    #[arg(short, long, global = true)]
    pub mods: Option<PathBuf>,

    /// Root type name (overrides config)
    #[arg(long, global = true)]
    pub root_name: Option<String>,

    /// TypeScript declaration keyword: interface or type (overrides config)
    #[arg(long, global = true)]
    pub declaration: Option<DeclarationStyle>,

    /// Hoist nested object types into named declarations
    #[arg(long, global = true)]
    pub separate_nested: bool,

    /// Convert snake_case keys to camelCase
    #[arg(long, global = true)]
    pub camel_case: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate code from a JSON document
    Generate {
        /// JSON document ("-" for stdin)
        input: PathBuf,

        /// Which output to print
        #[arg(short, long, default_value = "all")]
        target: Target,
    },

    /// Print the effective schema tree
    Infer {
        /// JSON document ("-" for stdin)
        input: PathBuf,
    },

    /// Add a key/value under the container at a node path
    Add {
        /// JSON document
        input: PathBuf,

        /// Node path of the container (e.g. root.user)
        path: String,

        /// Key of the new member (ignored for arrays)
        key: String,

        /// Value as JSON (bare words are taken as strings)
        #[arg(default_value = "\"\"")]
        value: String,

        /// Write the result back to the input file
        #[arg(short, long)]
        in_place: bool,
    },

    /// Remove the node at a path
    Remove {
        /// JSON document
        input: PathBuf,

        /// Node path to remove
        path: String,

        /// Write the result back to the input file
        #[arg(short, long)]
        in_place: bool,
    },

    /// Replace the value at a path
    Set {
        /// JSON document
        input: PathBuf,

        /// Node path to replace
        path: String,

        /// Value as JSON (bare words are taken as strings)
        value: String,

        /// Write the result back to the input file
        #[arg(short, long)]
        in_place: bool,
    },

    /// Record schema edits for a node in the modifications file
    Modify {
        /// Node id (e.g. root.user_name)
        id: String,

        /// Toggle the optional flag
        #[arg(long)]
        toggle_optional: bool,

        /// Set the optional flag explicitly
        #[arg(long)]
        optional: Option<bool>,

        /// Rename the key
        #[arg(long)]
        rename: Option<String>,

        /// Override the type with a TypeScript expression ("" clears it)
        #[arg(long = "type")]
        type_override: Option<String>,

        /// Drop every edit recorded for the node
        #[arg(long)]
        clear: bool,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Generator output selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
    /// Every target, separated by headers
    All,
    /// TypeScript declarations
    Typescript,
    /// Zod schema module
    Zod,
    /// Data-fetching hook stub
    Query,
    /// Form-binding hook stub
    Form,
    /// Default-value literal
    Defaults,
}

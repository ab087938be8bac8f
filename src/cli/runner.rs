//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, Target};
use crate::config::{load_config, GeneratorConfig};
use crate::editor;
use crate::error::{Error, Result, ResultExt};
use crate::overlay::SchemaModifications;
use crate::session::{Artifacts, Session};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate { input, target } => self.generate(input, *target),
            Commands::Infer { input } => self.infer(input),
            Commands::Add {
                input,
                path,
                key,
                value,
                in_place,
            } => {
                let text = read_input(input)?;
                let out = editor::add_node(&text, path, key, parse_value(value));
                write_output(input, &out, *in_place)
            }
            Commands::Remove {
                input,
                path,
                in_place,
            } => {
                let text = read_input(input)?;
                let out = editor::remove_node(&text, path);
                write_output(input, &out, *in_place)
            }
            Commands::Set {
                input,
                path,
                value,
                in_place,
            } => {
                let text = read_input(input)?;
                let out = editor::update_node_value(&text, path, parse_value(value));
                write_output(input, &out, *in_place)
            }
            Commands::Modify {
                id,
                toggle_optional,
                optional,
                rename,
                type_override,
                clear,
            } => self.modify(
                id,
                *toggle_optional,
                *optional,
                rename.as_deref(),
                type_override.as_deref(),
                *clear,
            ),
            Commands::Serve { port } => {
                let config = crate::cli::ServerConfig {
                    generator: self.generator_config()?,
                };
                crate::cli::serve(config, *port).await
            }
        }
    }

    /// Build the generator config: file values first, then CLI flags
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(name) = &self.cli.root_name {
            config.root_name.clone_from(name);
        }
        if let Some(declaration) = self.cli.declaration {
            config.declaration = declaration;
        }
        if self.cli.separate_nested {
            config.separate_nested = true;
        }
        if self.cli.camel_case {
            config.camel_case = true;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load the modifications file, or an empty map when none is given
    fn load_modifications(&self) -> Result<SchemaModifications> {
        let Some(path) = &self.cli.mods else {
            return Ok(SchemaModifications::new());
        };
        if !path.exists() {
            return Ok(SchemaModifications::new());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read modifications '{}'", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(SchemaModifications::new());
        }
        SchemaModifications::from_json(&contents)
    }

    fn session(&self, input: &Path) -> Result<Session> {
        Ok(Session::new(read_input(input)?).with_modifications(self.load_modifications()?))
    }

    /// Render generator output
    fn generate(&self, input: &Path, target: Target) -> Result<()> {
        let config = self.generator_config()?;
        let artifacts = self.session(input)?.render(&config)?;

        if artifacts.is_empty() {
            tracing::warn!("Input is empty, nothing to generate");
            return Ok(());
        }

        println!("{}", select_target(&artifacts, target));
        Ok(())
    }

    /// Print the effective schema tree
    fn infer(&self, input: &Path) -> Result<()> {
        let tree = self.session(input)?.effective_tree()?;
        println!("{}", serde_json::to_string_pretty(&tree)?);
        Ok(())
    }

    /// Record edits for one node in the modifications file
    fn modify(
        &self,
        id: &str,
        toggle_optional: bool,
        optional: Option<bool>,
        rename: Option<&str>,
        type_override: Option<&str>,
        clear: bool,
    ) -> Result<()> {
        let path = self
            .cli
            .mods
            .as_ref()
            .ok_or_else(|| Error::config("Modifications file not specified (use -m flag)"))?;
        let mut mods = self.load_modifications()?;

        if clear {
            mods.clear(id);
        }
        if toggle_optional {
            mods.toggle_optional(id);
        }
        if let Some(optional) = optional {
            mods.set_optional(id, optional);
        }
        if let Some(new_key) = rename {
            let new_key = new_key.trim();
            if new_key.is_empty() {
                return Err(Error::edit(id, "new key cannot be empty"));
            }
            mods.rename(id, new_key);
        }
        if let Some(type_expr) = type_override {
            mods.set_type_override(id, type_expr);
        }

        fs::write(path, mods.to_json())
            .with_context(|| format!("Failed to write modifications '{}'", path.display()))?;
        tracing::info!(id, edits = mods.len(), "Updated modifications");

        match mods.get(id) {
            Some(entry) => println!("{}", serde_json::to_string_pretty(entry)?),
            None => println!("{{}}"),
        }
        Ok(())
    }
}

/// Pick one artifact, or all of them under headers
fn select_target(artifacts: &Artifacts, target: Target) -> String {
    match target {
        Target::Typescript => artifacts.typescript.clone(),
        Target::Zod => artifacts.zod.clone(),
        Target::Query => artifacts.query_hook.clone(),
        Target::Form => artifacts.form_hook.clone(),
        Target::Defaults => artifacts.default_values.clone(),
        Target::All => [
            ("types.ts", &artifacts.typescript),
            ("schemas.ts", &artifacts.zod),
            ("query hook", &artifacts.query_hook),
            ("form hook", &artifacts.form_hook),
            ("default values", &artifacts.default_values),
        ]
        .iter()
        .map(|(title, body)| format!("// ---- {title} ----\n{body}"))
        .collect::<Vec<_>>()
        .join("\n\n"),
    }
}

/// Parse a CLI value argument: JSON if it parses, otherwise a plain string
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Read a document from a file, or stdin for `-`
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })
}

/// Print edited text, or write it back to the input file
fn write_output(path: &Path, text: &str, in_place: bool) -> Result<()> {
    if in_place && path.as_os_str() != "-" {
        fs::write(path, text)?;
        tracing::info!(path = %path.display(), "Wrote document");
    } else {
        println!("{text}");
    }
    Ok(())
}

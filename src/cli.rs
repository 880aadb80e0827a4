//! Minimal CLI: load → (patch) → (jq) → generate → write
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, Args};
use serde_json::Value;

use oas_typegen::{generate, GenerateOptions, OutputType};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate TypeScript, Flow or io-ts declarations from the schemas of an OpenAPI 3.0 document
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit TypeScript type aliases
    Typescript(Target),
    /// emit Flow type aliases
    Flow(Target),
    /// emit io-ts codecs, preceded by the matching TypeScript types
    Codec(Target),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// OpenAPI document: file path, http(s) URL, or '-' for stdin (JSON or YAML)
    #[arg(long, short)]
    input: String,

    /// patch document merged into the input before generation (JSON merge-patch)
    #[arg(long)]
    patch: Option<String>,

    /// JQ pre-process filter applied to the (patched) document
    #[arg(long)]
    jq_expr: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct Target {
    #[command(flatten)]
    input_settings: InputSettings,

    /// fail on schema shapes that have no type mapping instead of emitting an unknown type
    #[arg(long, default_value_t = false)]
    exit_on_invalid_type: bool,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Value> {
        let mut document = oas_typegen::load::load_document(&self.input)?;
        if let Some(patch) = self.patch.as_ref() {
            let patch_doc = oas_typegen::load::load_document(patch)
                .with_context(|| format!("failed to load patch document {patch}"))?;
            oas_typegen::patch::merge_patch(&mut document, patch_doc);
        }
        if let Some(jq_expr) = self.jq_expr.as_ref() {
            document = oas_typegen::jq_exec::filter_document(jq_expr, &document)
                .with_context(|| format!("failed to apply jq expression to {}", self.input))?;
        }
        Ok(document)
    }
}

impl Target {
    fn run(&self, output_type: OutputType) -> Result<()> {
        let document = self.input_settings.load()?;
        let options = GenerateOptions {
            output_type,
            exit_on_invalid_type: self.exit_on_invalid_type,
        };
        let source = generate(&options, &document)
            .with_context(|| format!("failed to generate types from {}", self.input_settings.input))?;
        write_output(self.out.as_ref(), &source)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        let (target, output_type) = match &self.cmd {
            Command::Typescript(target) => (target, OutputType::TypeScript),
            Command::Flow(target) => (target, OutputType::Flow),
            Command::Codec(target) => (target, OutputType::Codec),
        };
        // debug path
        if target.no_op {
            eprintln!("{self:#?}");
            return Ok(())
        }
        target.run(output_type)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&PathBuf>, source: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, source).with_context(|| format!("failed to write {}", out.display()))?;
            tracing::info!(path = %out.display(), "wrote declarations");
        }
        None => println!("{source}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommand_and_flags() {
        let cli = CommandLineInterface::try_parse_from([
            "oas-typegen", "codec", "-i", "api.yaml", "--patch", "fix.json", "--exit-on-invalid-type", "-o", "gen/api.ts",
        ]).unwrap();
        let Command::Codec(target) = &cli.cmd else { panic!("expected codec subcommand") };
        assert_eq!(target.input_settings.input, "api.yaml");
        assert_eq!(target.input_settings.patch.as_deref(), Some("fix.json"));
        assert!(target.exit_on_invalid_type);
        assert_eq!(target.out.as_deref(), Some(std::path::Path::new("gen/api.ts")));
    }

    #[test]
    fn input_is_required() {
        assert!(CommandLineInterface::try_parse_from(["oas-typegen", "flow"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        CommandLineInterface::command().debug_assert();
    }
}

//! Document-level driver: version check, schema extraction, declarations.
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::codegen::{Codec, Flow, Generator, TypeScript};
use crate::error::{Error, Result};
use crate::ir::Definitions;
use crate::lower::lower_to_ir;
use crate::naming::type_name;
use crate::schema::RawSchema;
use crate::translate::Translator;

static SUPPORTED_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^3\.0\.\d+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    #[default]
    TypeScript,
    Flow,
    Codec,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub output_type: OutputType,
    pub exit_on_invalid_type: bool,
}

/// Render every named schema of `document` as one source module.
pub fn generate(options: &GenerateOptions, document: &Value) -> Result<String> {
    check_version(document)?;
    let definitions = extract_definitions(document)?;
    let exit = options.exit_on_invalid_type;
    match options.output_type {
        OutputType::TypeScript => render_module(&TypeScript, exit, &definitions),
        OutputType::Flow => render_module(&Flow, exit, &definitions),
        OutputType::Codec => {
            // static types first so the codecs can sit next to same-named types
            let types = render_module(&TypeScript, exit, &definitions)?;
            let codecs = render_module(&Codec, exit, &definitions)?;
            Ok(format!("{types};\n{codecs}"))
        }
    }
}

pub fn check_version(document: &Value) -> Result<()> {
    let version = document.get("openapi").and_then(Value::as_str);
    match version {
        Some(v) if SUPPORTED_VERSION.is_match(v) => Ok(()),
        _ => Err(Error::UnsupportedVersion(version.map(str::to_owned))),
    }
}

/// `components.schemas`, parsed and tagged, in declaration order.
pub fn extract_definitions(document: &Value) -> Result<Definitions> {
    let schemas = document
        .pointer("/components/schemas")
        .ok_or(Error::MissingDefinitions)?;
    let raw: IndexMap<String, RawSchema> =
        crate::path_de::from_value_with_path(schemas.clone()).map_err(Error::MalformedSchema)?;
    let mut out = Definitions::with_capacity(raw.len());
    for (name, schema) in &raw {
        out.insert(name.clone(), lower_to_ir(schema));
    }
    Ok(out)
}

fn render_module<G: Generator>(generator: &G, exit_on_invalid_type: bool, definitions: &Definitions) -> Result<String> {
    let translator = Translator::new(generator, exit_on_invalid_type);
    let mut declarations = Vec::with_capacity(definitions.len());
    for (name, property) in definitions {
        let ty = translator.translate(property)?;
        tracing::debug!(schema = %name, "translated");
        declarations.push(generator.render_declaration(&type_name(name), &ty));
    }
    Ok(format!("{}{}", generator.header(), generator.combine(&declarations)))
}

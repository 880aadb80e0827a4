//! Optional jq pre-processing of the loaded document (via jaq).
use anyhow::{anyhow, bail, Result};
use jaq_core::{compile::Undefined, load, Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

/// Run `filter_src` over `input` and collect every output value.
pub fn run_jaq(filter_src: &str, input: &Value) -> Result<Vec<Value>> {
    let loader = load::Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = load::Arena::default();
    let program = load::File { code: filter_src, path: () };

    let modules = loader
        .load(&arena, program)
        .map_err(format_parse_errors)?;

    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(format_undefined_errors)?;

    let inputs = RcIter::new(core::iter::empty());
    let outputs = filter.run((Ctx::new([], &inputs), Val::from(input.clone())));

    let mut out = Vec::new();
    for item in outputs {
        let val = item.map_err(|e| anyhow!("jq runtime error: {e:?}"))?;
        // Val's Display is JSON text; object key order survives the round-trip
        out.push(serde_json::from_str(&val.to_string())?);
    }
    Ok(out)
}

/// Apply a jq filter that must turn the document into exactly one document.
pub fn filter_document(filter_src: &str, document: &Value) -> Result<Value> {
    let mut outputs = run_jaq(filter_src, document)?;
    match outputs.len() {
        1 => Ok(outputs.remove(0)),
        n => bail!("jq expression `{filter_src}` produced {n} values, expected exactly one document"),
    }
}

fn format_parse_errors(
    errs: Vec<(load::File<&str, ()>, load::Error<&str>)>,
) -> anyhow::Error {
    let mut s = String::new();
    for (file, err) in errs {
        s.push_str(&format!("parse error: {err:?} in `{}`\n", file.code));
    }
    anyhow!(s)
}

fn format_undefined_errors(
    errs: Vec<(load::File<&str, ()>, Vec<(&str, Undefined)>)>,
) -> anyhow::Error {
    let mut s = String::new();
    for (file, list) in errs {
        for (name, undef) in list {
            s.push_str(&format!("undefined `{name}`: {undef:?} in `{}`\n", file.code));
        }
    }
    anyhow!(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_can_drop_a_schema() {
        let doc = json!({"openapi": "3.0.0", "components": {"schemas": {"A": {"type": "string"}, "B": {"type": "number"}}}});
        let out = filter_document("del(.components.schemas.B)", &doc).unwrap();
        assert_eq!(out, json!({"openapi": "3.0.0", "components": {"schemas": {"A": {"type": "string"}}}}));
    }

    #[test]
    fn multiple_outputs_are_rejected() {
        let doc = json!({"a": 1, "b": 2});
        assert!(filter_document(".[]", &doc).is_err());
    }

    #[test]
    fn syntax_errors_surface() {
        assert!(run_jaq(".[", &json!({})).is_err());
    }
}

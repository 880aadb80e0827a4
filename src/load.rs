//! Reading schema and patch documents from files, URLs or stdin.
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
    /// JSON first, YAML as fallback.
    Sniff,
}

fn format_of(source: &str) -> Format {
    let source = source.split(['?', '#']).next().unwrap_or(source);
    match Path::new(source).extension().and_then(|e| e.to_str()) {
        Some("json") => Format::Json,
        Some("yaml" | "yml") => Format::Yaml,
        _ => Format::Sniff,
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read document from stdin")?;
        return Ok(text);
    }
    if is_url(source) {
        tracing::debug!(url = source, "fetching document");
        let response = reqwest::blocking::get(source)
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("failed to fetch {source}"))?;
        return response
            .text()
            .with_context(|| format!("failed to read response body of {source}"));
    }
    std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
}

pub fn parse_document(source: &str, text: &str) -> Result<Value> {
    match format_of(source) {
        Format::Json => serde_json::from_str(text).with_context(|| format!("failed to parse JSON ({source})")),
        Format::Yaml => serde_yaml::from_str(text).with_context(|| format!("failed to parse YAML ({source})")),
        Format::Sniff => match serde_json::from_str(text) {
            Ok(value) => Ok(value),
            Err(_) => serde_yaml::from_str(text)
                .with_context(|| format!("failed to parse {source} as JSON or YAML")),
        },
    }
}

/// Load a JSON or YAML document from a path, `http(s)://` URL, or `-`.
pub fn load_document(source: &str) -> Result<Value> {
    let text = read_source(source)?;
    parse_document(source, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_follows_extension() {
        assert_eq!(format_of("api/openapi.json"), Format::Json);
        assert_eq!(format_of("https://example.com/openapi.yaml?v=2"), Format::Yaml);
        assert_eq!(format_of("api.yml"), Format::Yaml);
        assert_eq!(format_of("-"), Format::Sniff);
        assert_eq!(format_of("https://example.com/schema"), Format::Sniff);
    }

    #[test]
    fn yaml_keeps_key_order() {
        let text = "openapi: 3.0.1\ncomponents:\n  schemas:\n    Zed:\n      type: string\n    Alpha:\n      type: number\n";
        let doc = parse_document("openapi.yaml", text).unwrap();
        let names: Vec<_> = doc["components"]["schemas"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["Zed", "Alpha"]);
        assert_eq!(doc["openapi"], json!("3.0.1"));
    }

    #[test]
    fn sniffing_falls_back_to_yaml() {
        assert_eq!(parse_document("-", r#"{"a": 1}"#).unwrap(), json!({"a": 1}));
        assert_eq!(parse_document("-", "a: [1, 2]").unwrap(), json!({"a": [1, 2]}));
    }

    #[test]
    fn json_errors_name_the_source() {
        let err = parse_document("broken.json", "{").unwrap_err();
        assert!(format!("{err}").contains("broken.json"));
    }
}

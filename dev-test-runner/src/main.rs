//! Fixture runner: every `fixtures/*.json` holds a document, the options to
//! run it with, and the exact expected output (or expected error prefix).
//!
//! cargo run -p dev-test-runner -- [NAME_REGEX]
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use colored::Colorize;
use regex::Regex;
use serde::Deserialize;

use oas_typegen::{generate, GenerateOptions, OutputType};

#[derive(Debug, Deserialize)]
struct Fixture {
    output_type: OutputType,
    #[serde(default)]
    exit_on_invalid_type: bool,
    document: serde_json::Value,
    #[serde(default)]
    expected: Option<String>,
    /// prefix of the rendered error message
    #[serde(default)]
    expected_error: Option<String>,
}

enum Outcome {
    Pass,
    Fail(String),
}

fn run_fixture(path: &Path) -> Outcome {
    let source = match std::fs::read_to_string(path) {
        Ok(x) => x,
        Err(error) => return Outcome::Fail(format!("failed to read fixture: {error}")),
    };
    let fixture = match oas_typegen::path_de::from_str_with_path::<Fixture>(&source) {
        Ok(x) => x,
        Err(error) => return Outcome::Fail(format!("malformed fixture {error}")),
    };
    let options = GenerateOptions {
        output_type: fixture.output_type,
        exit_on_invalid_type: fixture.exit_on_invalid_type,
    };
    match (generate(&options, &fixture.document), fixture.expected, fixture.expected_error) {
        (Ok(actual), Some(expected), _) if actual == expected => Outcome::Pass,
        (Ok(actual), Some(expected), _) => {
            Outcome::Fail(format!("expected:\n{expected}\nactual:\n{actual}"))
        }
        (Err(error), _, Some(prefix)) if error.to_string().starts_with(&prefix) => Outcome::Pass,
        (Err(error), _, _) => Outcome::Fail(format!("unexpected error: {error}")),
        (Ok(actual), None, _) => Outcome::Fail(format!("expected an error, got:\n{actual}")),
    }
}

fn fixture_paths(dir: &Path, filter: Option<&Regex>) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let pattern = format!("{}/*.json", dir.display());
    let mut out = Vec::<PathBuf>::new();
    // glob yields paths in alphabetical order
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if filter.is_some_and(|rx| !rx.is_match(name)) {
            continue;
        }
        out.push(path);
    }
    if out.is_empty() {
        return Err(format!("no fixtures matched: {pattern}").into());
    }
    Ok(out)
}

fn main() -> ExitCode {
    let filter = match std::env::args().nth(1).map(|s| Regex::new(&s)).transpose() {
        Ok(x) => x,
        Err(error) => {
            eprintln!("invalid filter: {error}");
            return ExitCode::FAILURE;
        }
    };
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    let paths = match fixture_paths(&dir, filter.as_ref()) {
        Ok(x) => x,
        Err(error) => {
            eprintln!("failed to list {}: {error}", dir.display());
            return ExitCode::FAILURE;
        }
    };

    let mut failed = 0usize;
    for path in &paths {
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("?");
        match run_fixture(path) {
            Outcome::Pass => eprintln!("{} {name}", "✅".green()),
            Outcome::Fail(reason) => {
                failed += 1;
                eprintln!("{} {name}\n{reason}", "❌".red());
            }
        }
    }
    eprintln!("{} fixtures, {failed} failed", paths.len());
    if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    #[test]
    fn fixtures_are_listed_in_name_order() {
        let paths = fixture_paths(&fixtures_dir(), None).unwrap();
        let names: Vec<_> = paths.iter().filter_map(|p| p.file_name()?.to_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"petstore_typescript.json"));
    }

    #[test]
    fn name_filter_narrows_the_list() {
        let rx = Regex::new("^petstore_").unwrap();
        let paths = fixture_paths(&fixtures_dir(), Some(&rx)).unwrap();
        assert_eq!(paths.len(), 3);
        let none = Regex::new("^does_not_exist").unwrap();
        assert!(fixture_paths(&fixtures_dir(), Some(&none)).is_err());
    }

    #[test]
    fn every_fixture_passes() {
        for path in fixture_paths(&fixtures_dir(), None).unwrap() {
            if let Outcome::Fail(reason) = run_fixture(&path) {
                panic!("{}: {reason}", path.display());
            }
        }
    }
}

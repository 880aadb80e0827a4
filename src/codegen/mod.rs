//! Output syntax strategies.
//!
//! A `Generator` is a table of rendering primitives. The translator builds
//! type expressions bottom-up by calling into it and never looks at target
//! syntax itself.
pub mod codec;
pub mod flow;
pub mod typescript;

pub use codec::Codec;
pub use flow::Flow;
pub use typescript::TypeScript;

pub trait Generator: Send + Sync {
    fn render_string(&self) -> String;
    /// Also used for `integer`; none of the targets has an integer subtype.
    fn render_number(&self) -> String;
    fn render_boolean(&self) -> String;
    fn render_null(&self) -> String;
    /// Escape type for shapes nothing else matches.
    fn render_unknown(&self) -> String;

    fn render_array(&self, item: &str) -> String;
    fn render_union(&self, members: &[String]) -> String;
    fn render_intersection(&self, members: &[String]) -> String;
    fn render_field(&self, name: &str, required: bool, ty: &str) -> String;
    fn render_object(&self, fields: &[String]) -> String;
    fn render_enum(&self, values: &[String]) -> String;
    /// `name` is already a sanitized identifier.
    fn render_reference(&self, name: &str) -> String {
        name.to_string()
    }
    fn render_nullable(&self, ty: &str) -> String;

    fn render_declaration(&self, name: &str, ty: &str) -> String;
    fn combine(&self, declarations: &[String]) -> String;
    fn header(&self) -> String;
}

// -------------------- shared syntax helpers --------------------

/// JSON string literal; valid property key syntax in every target.
pub(crate) fn quote_key(name: &str) -> String {
    serde_json::to_string(name).unwrap_or_else(|_| format!("\"{name}\""))
}

/// Single-quoted string literal type.
pub(crate) fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// `'a'|'b'`; used by both static targets.
pub(crate) fn literal_union(values: &[String]) -> String {
    values.iter().map(|v| quote_literal(v)).collect::<Vec<_>>().join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_json_quoted() {
        assert_eq!(quote_key("name"), r#""name""#);
        assert_eq!(quote_key("a\"b"), r#""a\"b""#);
    }

    #[test]
    fn literals_are_single_quoted_and_escaped() {
        assert_eq!(quote_literal("open"), "'open'");
        assert_eq!(quote_literal("it's"), r"'it\'s'");
        assert_eq!(quote_literal(r"a\b"), r"'a\\b'");
    }
}

use super::{quote_key, Generator};

/// io-ts runtime codecs.
///
/// Optional keys are encoded as `T | undefined` inside `t.type`, which accepts
/// a missing key. Unions and intersections of a single member collapse to the
/// member, since io-ts wants at least two; empty ones become `t.never`
/// (union, enum) or `t.unknown` (intersection).
#[derive(Debug, Default, Clone, Copy)]
pub struct Codec;

fn combinator(name: &str, members: &[String], empty: &str) -> String {
    match members {
        [] => empty.to_string(),
        [single] => single.clone(),
        _ => format!("t.{name}([{}])", members.join(",")),
    }
}

impl Generator for Codec {
    fn render_string(&self) -> String { "t.string".into() }
    fn render_number(&self) -> String { "t.number".into() }
    fn render_boolean(&self) -> String { "t.boolean".into() }
    fn render_null(&self) -> String { "t.null".into() }
    fn render_unknown(&self) -> String { "t.unknown".into() }

    fn render_array(&self, item: &str) -> String {
        format!("t.array({item})")
    }
    fn render_union(&self, members: &[String]) -> String {
        combinator("union", members, "t.never")
    }
    fn render_intersection(&self, members: &[String]) -> String {
        combinator("intersection", members, "t.unknown")
    }
    fn render_field(&self, name: &str, required: bool, ty: &str) -> String {
        if required {
            format!("{}:{ty}", quote_key(name))
        } else {
            format!("{}:t.union([{ty},t.undefined])", quote_key(name))
        }
    }
    fn render_object(&self, fields: &[String]) -> String {
        format!("t.type({{{}}})", fields.join(","))
    }
    fn render_enum(&self, values: &[String]) -> String {
        if values.is_empty() {
            return "t.never".into();
        }
        let keys = values
            .iter()
            .map(|v| format!("{}:null", quote_key(v)))
            .collect::<Vec<_>>();
        format!("t.keyof({{{}}})", keys.join(","))
    }
    fn render_nullable(&self, ty: &str) -> String {
        format!("t.union([{ty},t.null])")
    }

    fn render_declaration(&self, name: &str, ty: &str) -> String {
        format!("export const {name}={ty}")
    }
    fn combine(&self, declarations: &[String]) -> String {
        declarations.join(";\n")
    }
    fn header(&self) -> String {
        "import * as t from 'io-ts'\n".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_accept_undefined() {
        let g = Codec;
        let fields = vec![
            g.render_field("name", true, &g.render_string()),
            g.render_field("age", false, &g.render_number()),
        ];
        assert_eq!(
            g.render_object(&fields),
            r#"t.type({"name":t.string,"age":t.union([t.number,t.undefined])})"#
        );
    }

    #[test]
    fn single_member_composites_collapse() {
        let g = Codec;
        assert_eq!(g.render_union(&["A".into()]), "A");
        assert_eq!(g.render_intersection(&["A".into(), "B".into()]), "t.intersection([A,B])");
    }

    #[test]
    fn enum_uses_keyof() {
        let g = Codec;
        assert_eq!(g.render_enum(&["open".into(), "closed".into()]), r#"t.keyof({"open":null,"closed":null})"#);
    }

    #[test]
    fn empty_member_lists_stay_valid() {
        let g = Codec;
        assert_eq!(g.render_union(&[]), "t.never");
        assert_eq!(g.render_intersection(&[]), "t.unknown");
        assert_eq!(g.render_enum(&[]), "t.never");
    }
}

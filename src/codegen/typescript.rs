use super::{literal_union, quote_key, Generator};

/// Plain TypeScript type aliases.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeScript;

impl Generator for TypeScript {
    fn render_string(&self) -> String { "string".into() }
    fn render_number(&self) -> String { "number".into() }
    fn render_boolean(&self) -> String { "boolean".into() }
    fn render_null(&self) -> String { "null".into() }
    fn render_unknown(&self) -> String { "unknown".into() }

    fn render_array(&self, item: &str) -> String {
        format!("Array<{item}>")
    }
    fn render_union(&self, members: &[String]) -> String {
        if members.is_empty() { return "never".into() }
        format!("({})", members.join("|"))
    }
    fn render_intersection(&self, members: &[String]) -> String {
        if members.is_empty() { return "unknown".into() }
        format!("({})", members.join("&"))
    }
    fn render_field(&self, name: &str, required: bool, ty: &str) -> String {
        let optional = if required { "" } else { "?" };
        format!("{}{optional}:{ty}", quote_key(name))
    }
    fn render_object(&self, fields: &[String]) -> String {
        format!("{{{}}}", fields.join(","))
    }
    fn render_enum(&self, values: &[String]) -> String {
        if values.is_empty() { return "never".into() }
        literal_union(values)
    }
    fn render_nullable(&self, ty: &str) -> String {
        format!("({ty}|null)")
    }

    fn render_declaration(&self, name: &str, ty: &str) -> String {
        format!("export type {name}={ty}")
    }
    fn combine(&self, declarations: &[String]) -> String {
        declarations.join("\n")
    }
    fn header(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_with_optional_field() {
        let g = TypeScript;
        let fields = vec![
            g.render_field("name", true, &g.render_string()),
            g.render_field("age", false, &g.render_nullable(&g.render_number())),
        ];
        assert_eq!(g.render_object(&fields), r#"{"name":string,"age"?:(number|null)}"#);
    }

    #[test]
    fn composites_are_parenthesized() {
        let g = TypeScript;
        let members = vec!["A".to_string(), "B".to_string()];
        assert_eq!(g.render_union(&members), "(A|B)");
        assert_eq!(g.render_intersection(&members), "(A&B)");
        assert_eq!(g.render_array(&g.render_union(&members)), "Array<(A|B)>");
    }

    #[test]
    fn empty_object_and_enum() {
        let g = TypeScript;
        assert_eq!(g.render_object(&[]), "{}");
        assert_eq!(g.render_enum(&["open".into(), "closed".into()]), "'open'|'closed'");
    }

    #[test]
    fn empty_member_lists_stay_valid() {
        let g = TypeScript;
        assert_eq!(g.render_union(&[]), "never");
        assert_eq!(g.render_intersection(&[]), "unknown");
        assert_eq!(g.render_enum(&[]), "never");
    }
}

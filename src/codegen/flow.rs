use super::{literal_union, quote_key, Generator};

/// Flow type aliases. Nullable uses the maybe type `?T`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Flow;

impl Generator for Flow {
    fn render_string(&self) -> String { "string".into() }
    fn render_number(&self) -> String { "number".into() }
    fn render_boolean(&self) -> String { "boolean".into() }
    fn render_null(&self) -> String { "null".into() }
    fn render_unknown(&self) -> String { "mixed".into() }

    fn render_array(&self, item: &str) -> String {
        format!("Array<{item}>")
    }
    fn render_union(&self, members: &[String]) -> String {
        if members.is_empty() { return "empty".into() }
        format!("({})", members.join("|"))
    }
    fn render_intersection(&self, members: &[String]) -> String {
        if members.is_empty() { return "mixed".into() }
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
        if values.is_empty() { return "empty".into() }
        literal_union(values)
    }
    fn render_nullable(&self, ty: &str) -> String {
        format!("?{ty}")
    }

    fn render_declaration(&self, name: &str, ty: &str) -> String {
        format!("export type {name}={ty}")
    }
    fn combine(&self, declarations: &[String]) -> String {
        declarations.join("\n")
    }
    fn header(&self) -> String {
        "// @flow\n".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maybe_types_and_mixed() {
        let g = Flow;
        assert_eq!(g.render_nullable(&g.render_number()), "?number");
        assert_eq!(g.render_nullable(&g.render_union(&["A".into(), "B".into()])), "?(A|B)");
        assert_eq!(g.render_unknown(), "mixed");
    }

    #[test]
    fn module_carries_flow_pragma() {
        let g = Flow;
        let decls = vec![g.render_declaration("A", "string"), g.render_declaration("B", "Array<A>")];
        let module = format!("{}{}", g.header(), g.combine(&decls));
        assert_eq!(module, "// @flow\nexport type A=string\nexport type B=Array<A>");
    }

    #[test]
    fn empty_member_lists_stay_valid() {
        let g = Flow;
        assert_eq!(g.render_union(&[]), "empty");
        assert_eq!(g.render_intersection(&[]), "mixed");
        assert_eq!(g.render_enum(&[]), "empty");
    }
}

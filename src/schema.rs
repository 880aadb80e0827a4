//! Structural schema property, exactly as it appears in the document.
//!
//! Every keyword is optional; which ones are present decides the shape. This
//! is the only place that knows about field presence; `lower` turns it into
//! the tagged `ir::Property` right after deserialization.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSchema {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(rename = "allOf", default, skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<RawSchema>>,
    #[serde(rename = "anyOf", default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<RawSchema>>,
    #[serde(rename = "oneOf", default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<RawSchema>>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<RawSchema>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, RawSchema>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    /// description, format, additionalProperties, ... (diagnostics only)
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl RawSchema {
    pub fn is_nullable(&self) -> bool {
        self.nullable.unwrap_or(false)
    }

    /// Names of the composite keywords present on this level.
    pub fn composite_keywords(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.all_of.is_some() { out.push("allOf"); }
        if self.any_of.is_some() { out.push("anyOf"); }
        if self.one_of.is_some() { out.push("oneOf"); }
        out
    }

    /// Any field that describes a type by itself (as opposed to `nullable`
    /// or annotation keys).
    pub fn has_type_fields(&self) -> bool {
        self.reference.is_some()
            || self.type_.is_some()
            || self.items.is_some()
            || self.properties.is_some()
            || self.required.is_some()
            || self.enum_.is_some()
    }

    /// Compact JSON rendering for error messages.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }

    fn type_is(&self, expected: &str) -> bool {
        self.type_.as_deref() == Some(expected)
    }

    fn type_is_or_absent(&self, expected: &str) -> bool {
        self.type_.is_none() || self.type_is(expected)
    }

    pub(crate) fn is_array(&self) -> bool {
        self.items.is_some() && self.type_is_or_absent("array")
    }

    pub(crate) fn is_object(&self) -> bool {
        self.properties.is_some() && self.type_is_or_absent("object")
    }

    pub(crate) fn is_string_enum(&self) -> bool {
        match &self.enum_ {
            Some(values) => self.type_is_or_absent("string") && values.iter().all(Value::is_string),
            None => false,
        }
    }

    pub(crate) fn is_primitive(&self, keyword: &str) -> bool {
        self.type_is(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_keywords_and_keeps_extra_keys() {
        let raw: RawSchema = serde_json::from_value(json!({
            "type": "object",
            "description": "a pet",
            "required": ["name"],
            "properties": {"name": {"type": "string"}, "age": {"type": "integer", "nullable": true}}
        })).unwrap();
        assert_eq!(raw.type_.as_deref(), Some("object"));
        assert_eq!(raw.required.as_deref(), Some(&["name".to_string()][..]));
        let keys: Vec<_> = raw.properties.as_ref().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["name", "age"]);
        assert_eq!(raw.extra.get("description"), Some(&json!("a pet")));
        assert!(raw.properties.unwrap()["age"].is_nullable());
    }

    #[test]
    fn serializes_back_without_absent_keys() {
        let raw: RawSchema = serde_json::from_value(json!({"$ref": "#/components/schemas/A"})).unwrap();
        assert_eq!(raw.to_json_string(), r##"{"$ref":"#/components/schemas/A"}"##);
    }

    #[test]
    fn enum_requires_string_values() {
        let strings: RawSchema = serde_json::from_value(json!({"type": "string", "enum": ["a", "b"]})).unwrap();
        let numbers: RawSchema = serde_json::from_value(json!({"type": "string", "enum": [1, 2]})).unwrap();
        assert!(strings.is_string_enum());
        assert!(!numbers.is_string_enum());
    }
}

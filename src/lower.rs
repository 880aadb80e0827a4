use serde_json::Value;

use crate::ir::{Field, Kind, Property};
use crate::norm::{classify, normalize, Variant};
use crate::schema::RawSchema;

/// Tag a structural property once: normalize the whole tree, then classify
/// and recurse over the normalized nodes.
///
/// Total: shapes that are unknown or refused (several composite keywords on
/// one level) are kept as tagged nodes, and the translator decides when they
/// fail, at their position in the walk.
pub fn lower_to_ir(raw: &RawSchema) -> Property {
    lower_node(&normalize(raw))
}

// `n` is already normalized; normalization never touches `nullable`, so the
// flag read here is the one the document declared.
fn lower_node(n: &RawSchema) -> Property {
    Property { kind: lower_core(n), nullable: n.is_nullable() }
}

fn lower_core(n: &RawSchema) -> Kind {
    let keywords = n.composite_keywords();
    if keywords.len() > 1 {
        return Kind::Conflicting {
            keywords: keywords.join(", "),
            property: n.to_json_string(),
        };
    }
    match classify(n) {
        Variant::Reference => Kind::Reference(n.reference.clone().unwrap_or_default()),
        Variant::AllOf => Kind::AllOf(lower_members(n.all_of.as_deref())),
        Variant::AnyOf => Kind::AnyOf(lower_members(n.any_of.as_deref())),
        Variant::OneOf => Kind::OneOf(lower_members(n.one_of.as_deref())),
        Variant::Array => match n.items.as_deref() {
            Some(items) => Kind::Array(Box::new(lower_node(items))),
            None => Kind::Unrecognized(n.to_json_string()),
        },
        Variant::Object => {
            let required = n.required.as_deref().unwrap_or_default();
            let fields = n
                .properties
                .iter()
                .flatten()
                .map(|(name, field)| Field {
                    name: name.clone(),
                    ty: lower_node(field),
                    required: required.iter().any(|r| r == name),
                })
                .collect();
            Kind::Object { fields }
        }
        Variant::Enum => Kind::Enum(
            n.enum_
                .iter()
                .flatten()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect(),
        ),
        Variant::Number => Kind::Number,
        Variant::String => Kind::String,
        Variant::Boolean => Kind::Boolean,
        Variant::Integer => Kind::Integer,
        Variant::Null => Kind::Null,
        Variant::Unrecognized => Kind::Unrecognized(n.to_json_string()),
    }
}

fn lower_members(members: Option<&[RawSchema]>) -> Vec<Property> {
    members.unwrap_or_default().iter().map(lower_node).collect()
}

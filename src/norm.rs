//! Normalization and classification of structural properties.
//!
//! `normalize` repairs the common "composite plus sibling fields" shape:
//!
//! ```text
//! { type: object, allOf: [A], properties: {..} }
//!   ==> { allOf: [A, { type: object, properties: {..} }] }
//! ```
//!
//! `classify` then picks exactly one variant in a fixed precedence order.
use crate::schema::RawSchema;

/// Shape of a (normalized) property, in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Reference,
    AllOf,
    AnyOf,
    OneOf,
    Array,
    Object,
    Enum,
    Number,
    String,
    Boolean,
    Integer,
    Null,
    Unrecognized,
}

// -------------------- normalize --------------------

/// Move type-describing siblings of a composite keyword into a trailing
/// anonymous member of that composite. Recurses into every child.
///
/// Pure and idempotent: after one pass the outer level carries no type fields
/// next to its composite, so a second pass changes nothing.
pub fn normalize(p: &RawSchema) -> RawSchema {
    let mut out = p.clone();
    normalize_in_place(&mut out);
    out
}

fn normalize_in_place(p: &mut RawSchema) {
    // children first; the synthesized member is built from normalized parts
    for members in [&mut p.all_of, &mut p.any_of, &mut p.one_of].into_iter().flatten() {
        members.iter_mut().for_each(normalize_in_place);
    }
    if let Some(items) = p.items.as_deref_mut() {
        normalize_in_place(items);
    }
    if let Some(props) = p.properties.as_mut() {
        props.values_mut().for_each(normalize_in_place);
    }

    // with several composites the input is rejected later; leave it as-is
    if p.composite_keywords().len() != 1 || !p.has_type_fields() {
        return;
    }
    let sibling = RawSchema {
        reference: p.reference.take(),
        type_: p.type_.take(),
        items: p.items.take(),
        properties: p.properties.take(),
        required: p.required.take(),
        enum_: p.enum_.take(),
        ..RawSchema::default()
    };
    tracing::trace!(sibling = %sibling.to_json_string(), "moved composite siblings into member");
    let members = [&mut p.all_of, &mut p.any_of, &mut p.one_of]
        .into_iter()
        .flatten()
        .next();
    if let Some(members) = members {
        members.push(sibling);
    }
}

// -------------------- classify --------------------

/// First variant whose structural predicate matches.
pub fn classify(p: &RawSchema) -> Variant {
    if p.reference.is_some() { return Variant::Reference }
    if p.all_of.is_some() { return Variant::AllOf }
    if p.any_of.is_some() { return Variant::AnyOf }
    if p.one_of.is_some() { return Variant::OneOf }
    if p.is_array() { return Variant::Array }
    if p.is_object() { return Variant::Object }
    if p.is_string_enum() { return Variant::Enum }
    if p.is_primitive("number") { return Variant::Number }
    if p.is_primitive("string") { return Variant::String }
    if p.is_primitive("boolean") { return Variant::Boolean }
    if p.is_primitive("integer") { return Variant::Integer }
    if p.is_primitive("null") { return Variant::Null }
    Variant::Unrecognized
}

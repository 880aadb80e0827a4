//! Property → type expression, rendered through a `Generator`.
use crate::codegen::Generator;
use crate::error::{Error, Result};
use crate::ir::{Field, Kind, Property};
use crate::naming::reference_name;

pub struct Translator<'g, G: Generator + ?Sized> {
    generator: &'g G,
    exit_on_invalid_type: bool,
}

impl<'g, G: Generator + ?Sized> Translator<'g, G> {
    pub fn new(generator: &'g G, exit_on_invalid_type: bool) -> Self {
        Self { generator, exit_on_invalid_type }
    }

    /// Depth-first, left to right; the first failure aborts.
    pub fn translate(&self, p: &Property) -> Result<String> {
        let ty = self.translate_core(&p.kind)?;
        if p.nullable {
            Ok(self.generator.render_nullable(&ty))
        } else {
            Ok(ty)
        }
    }

    fn translate_core(&self, kind: &Kind) -> Result<String> {
        let g = self.generator;
        let ty = match kind {
            Kind::Reference(path) => g.render_reference(&reference_name(path)),
            Kind::AllOf(members) => g.render_intersection(&self.translate_all(members)?),
            Kind::AnyOf(members) | Kind::OneOf(members) => g.render_union(&self.translate_all(members)?),
            Kind::Array(item) => g.render_array(&self.translate(item)?),
            Kind::Object { fields } => g.render_object(&self.translate_fields(fields)?),
            Kind::Enum(values) => g.render_enum(values),
            Kind::Number | Kind::Integer => g.render_number(),
            Kind::String => g.render_string(),
            Kind::Boolean => g.render_boolean(),
            Kind::Null => g.render_null(),
            Kind::Unrecognized(original) => {
                if self.exit_on_invalid_type {
                    return Err(Error::InvalidType(original.clone()));
                }
                tracing::warn!(property = %original, "unrecognized shape, rendering unknown type");
                g.render_unknown()
            }
            Kind::Conflicting { keywords, property } => {
                return Err(Error::ConflictingComposites {
                    keywords: keywords.clone(),
                    property: property.clone(),
                });
            }
        };
        Ok(ty)
    }

    fn translate_all(&self, members: &[Property]) -> Result<Vec<String>> {
        members.iter().map(|m| self.translate(m)).collect()
    }

    fn translate_fields(&self, fields: &[Field]) -> Result<Vec<String>> {
        let mut out = Vec::with_capacity(fields.len());
        for field in fields {
            let ty = self.translate(&field.ty)?;
            out.push(self.generator.render_field(&field.name, field.required, &ty));
        }
        Ok(out)
    }
}

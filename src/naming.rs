use once_cell::sync::Lazy;
use regex::Regex;

pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

static NON_IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_$]").unwrap());
static LEADING_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]").unwrap());

/// Identifier used for a named schema in every target language.
pub fn type_name(name: &str) -> String {
    let ident = NON_IDENT.replace_all(name, "_");
    if ident.is_empty() || LEADING_DIGIT.is_match(&ident) {
        format!("_{ident}")
    } else {
        ident.into_owned()
    }
}

/// `#/components/schemas/Pet` → `Pet`. Foreign refs keep their full path
/// and are sanitized as a whole.
pub fn reference_name(reference: &str) -> String {
    type_name(reference.strip_prefix(SCHEMA_REF_PREFIX).unwrap_or(reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(type_name("Pet"), "Pet");
        assert_eq!(type_name("pet_owner$1"), "pet_owner$1");
    }

    #[test]
    fn invalid_characters_are_replaced() {
        assert_eq!(type_name("api.v1.Pet-Info"), "api_v1_Pet_Info");
        assert_eq!(type_name("2fa"), "_2fa");
        assert_eq!(type_name(""), "_");
    }

    #[test]
    fn reference_prefix_is_stripped() {
        assert_eq!(reference_name("#/components/schemas/Pet"), "Pet");
        assert_eq!(reference_name("#/components/schemas/Pet.Kind"), "Pet_Kind");
        assert_eq!(reference_name("other.yaml#/Pet"), "other_yaml__Pet");
    }
}

// Tagged property tree for translation. No field-presence checks past this point.
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub kind: Kind,
    pub nullable: bool,        // declared on the original (pre-normalization) property
}

#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Reference(String),       // raw `$ref` path
    AllOf(Vec<Property>),    // intersection
    AnyOf(Vec<Property>),    // union
    OneOf(Vec<Property>),    // union, rendered like AnyOf
    Array(Box<Property>),
    Object {
        fields: Vec<Field>,  // document order
    },
    Enum(Vec<String>),       // document order
    Number,
    String,
    Boolean,
    Integer,
    Null,
    Unrecognized(String),    // serialized property, for diagnostics
    Conflicting {            // several composite keywords on one level
        keywords: String,
        property: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: Property,
    pub required: bool,      // listed in the object's `required`
}

impl Property {
    pub fn new(kind: Kind) -> Self {
        Self { kind, nullable: false }
    }

    pub fn nullable(kind: Kind) -> Self {
        Self { kind, nullable: true }
    }
}

/// Named schemas in declaration order.
pub type Definitions = IndexMap<String, Property>;

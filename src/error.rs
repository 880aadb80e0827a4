use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported version {}: expected 3.0.x", .0.as_deref().unwrap_or("<missing>"))]
    UnsupportedVersion(Option<String>),

    #[error("no definitions: document has no `components.schemas` section")]
    MissingDefinitions,

    #[error("invalid type: {0}")]
    InvalidType(String),

    #[error("conflicting composite keywords ({keywords}) in {property}")]
    ConflictingComposites { keywords: String, property: String },

    #[error("malformed schema {0}")]
    MalformedSchema(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

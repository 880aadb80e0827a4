//! OpenAPI 3.0 schemas → TypeScript, Flow or io-ts declarations.
//!
//! ```text
//! document ─> version check ─> components.schemas ─> RawSchema (serde)
//!          ─> normalize + classify ─> ir::Property ─> Translator<G> ─> declarations
//! ```
//!
//! ```
//! use oas_typegen::{generate, GenerateOptions, OutputType};
//!
//! let doc = serde_json::json!({
//!     "openapi": "3.0.3",
//!     "components": {"schemas": {"Status": {"type": "string", "enum": ["open", "closed"]}}}
//! });
//! let options = GenerateOptions { output_type: OutputType::TypeScript, exit_on_invalid_type: false };
//! assert_eq!(generate(&options, &doc).unwrap(), "export type Status='open'|'closed'");
//! ```
pub mod codegen;
pub mod document;
pub mod error;
pub mod ir;
pub mod jq_exec;
pub mod load;
pub mod lower;
pub mod naming;
pub mod norm;
pub mod patch;
pub mod path_de;
pub mod schema;
pub mod translate;

pub use codegen::Generator;
pub use document::{generate, GenerateOptions, OutputType};
pub use error::{Error, Result};
pub use translate::Translator;

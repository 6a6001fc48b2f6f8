//! Pattern-based extraction of an interface declaration from raw source text.
//!
//! Nothing here parses TypeScript. Names and types are found by regular
//! expression scans over the whole document, so the results are only as good as
//! the input is conventional.

pub mod declaration;
pub mod fields;

use serde::Serialize;

use crate::error::BuilderError;

pub use declaration::{base_name, ensure_exported_declaration, extract_name, has_unsupported_member};
pub use fields::{PatternExtractor, extract_data_types, extract_property_names, zip_fields};

/// One property of the declaration, as written in the source.
///
/// `name` keeps a trailing optional marker (`foo?`) if the source had one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    pub name: String,
    pub type_expression: String,
}

impl FieldEntry {
    pub fn new(name: impl Into<String>, type_expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_expression: type_expression.into(),
        }
    }
}

/// Source of the ordered field list for a declaration.
///
/// The orchestrator only depends on this trait, so a stricter parser can replace
/// [`PatternExtractor`] without touching assembly.
pub trait FieldExtractor {
    fn extract_fields(&self, text: &str) -> Result<Vec<FieldEntry>, BuilderError>;
}

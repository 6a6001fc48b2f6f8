pub mod assemble;
pub mod config;
pub mod defaults;
pub mod error;
pub mod extract;
pub mod host;
pub mod naming;
pub mod pipeline;
pub mod style;

pub use error::BuilderError;
pub use extract::FieldEntry;
pub use style::StyleProfile;

/// A generated file with path and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

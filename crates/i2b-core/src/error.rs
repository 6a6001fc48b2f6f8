use thiserror::Error;

use crate::host::{MessageKind, UserMessage};

/// Every way a single builder generation can stop.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    #[error("Please open a directory before creating a builder.")]
    NoWorkspace,

    #[error("No open text editor. Please open an interface file.")]
    NoEditor,

    #[error("No text found. Please open an interface file.")]
    NoText,

    #[error("Methods defined in interfaces are not currently supported.")]
    UnsupportedMember,

    #[error("No interface found. \"export interface\" must be in your code.")]
    NotADeclaration,

    #[error("Could not find the interface name.")]
    NoDeclaration,

    #[error("Could not find any properties defined in the interface.")]
    NoProperties,

    #[error("Could not find any data types defined in the interface.")]
    NoDataTypes,

    #[error("Found {properties} properties but {data_types} data types in the interface.")]
    FieldTypeMismatch {
        properties: usize,
        data_types: usize,
    },

    #[error("File save failed: {0}")]
    WriteFailed(String),
}

impl BuilderError {
    /// The user-facing message reported through the host for this failure.
    pub fn message(&self) -> UserMessage {
        UserMessage {
            kind: MessageKind::Error,
            text: self.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failed_appends_detail() {
        let err = BuilderError::WriteFailed("permission denied".to_string());
        assert_eq!(err.to_string(), "File save failed: permission denied");
    }

    #[test]
    fn test_mismatch_names_both_counts() {
        let err = BuilderError::FieldTypeMismatch {
            properties: 3,
            data_types: 2,
        };
        assert_eq!(
            err.to_string(),
            "Found 3 properties but 2 data types in the interface."
        );
    }

    #[test]
    fn test_message_is_error_kind() {
        let msg = BuilderError::NoText.message();
        assert_eq!(msg.kind, MessageKind::Error);
        assert_eq!(msg.text, "No text found. Please open an interface file.");
    }
}

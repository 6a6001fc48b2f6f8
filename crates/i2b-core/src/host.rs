//! Capabilities the generator needs from the environment that invokes it.

use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// A message for the host to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl UserMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }
}

/// The document currently open in the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Filesystem path, only used to derive the builder's file name.
    pub path: String,
    pub text: String,
}

/// Everything the pipeline reads from or hands back to its host.
pub trait Host {
    /// Root of the open workspace; empty when none is loaded.
    fn workspace_root(&self) -> String;

    fn active_document(&self) -> Option<Document>;

    fn show_message(&mut self, message: UserMessage);

    fn write_file(&mut self, path: &str, contents: &str) -> io::Result<()>;
}

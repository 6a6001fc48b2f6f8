use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::style::{LineBreak, StyleProfile};

/// Project configuration loaded from `.i2b.yaml` in the workspace root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub line_break: LineBreak,
    /// Spaces per indentation level.
    pub indent: usize,
    /// Drop a leading `I` from the interface name when naming the builder.
    pub strip_interface_prefix: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            line_break: LineBreak::Crlf,
            indent: 2,
            strip_interface_prefix: true,
        }
    }
}

impl BuilderConfig {
    /// Apply the configured overrides on top of a sniffed style.
    pub fn apply(&self, style: StyleProfile) -> StyleProfile {
        style
            .with_line_break(self.line_break)
            .with_indent(self.indent)
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".i2b.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<BuilderConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: BuilderConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# i2b configuration
line_break: crlf              # crlf | lf
indent: 2                     # spaces per nesting level
strip_interface_prefix: true  # IPerson -> PersonBuilder
"#
}

use serde::{Deserialize, Serialize};

/// Line-break sequence written into generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBreak {
    #[default]
    Crlf,
    Lf,
}

impl LineBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineBreak::Crlf => "\r\n",
            LineBreak::Lf => "\n",
        }
    }
}

/// Formatting conventions reproduced in a generated builder.
///
/// Computed once per invocation and passed explicitly to every stage that
/// writes text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleProfile {
    pub line_break: String,
    /// `";"` when the source uses semicolons, otherwise empty.
    pub statement_terminator: String,
    /// One nesting level of indentation.
    pub indent: String,
}

impl StyleProfile {
    pub fn with_line_break(mut self, line_break: LineBreak) -> Self {
        self.line_break = line_break.as_str().to_string();
        self
    }

    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.indent = " ".repeat(spaces);
        self
    }
}

/// Infer the style of `text`.
///
/// The line break is always CRLF here; callers override it from config. Any `;`
/// in the text, including one inside a comment or string, switches the
/// terminator on.
pub fn sniff(text: &str) -> StyleProfile {
    let statement_terminator = if text.contains(';') { ";" } else { "" };
    StyleProfile {
        line_break: LineBreak::Crlf.as_str().to_string(),
        statement_terminator: statement_terminator.to_string(),
        indent: "  ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semicolon_source() {
        let style = sniff("export interface A {\n  foo: string;\n}");
        assert_eq!(style.statement_terminator, ";");
    }

    #[test]
    fn test_no_semicolon_source() {
        let style = sniff("export interface A {\n  foo: string\n}");
        assert_eq!(style.statement_terminator, "");
    }

    #[test]
    fn test_semicolon_in_comment_counts() {
        let style = sniff("// a; b\nexport interface A {\n  foo: string\n}");
        assert_eq!(style.statement_terminator, ";");
    }

    #[test]
    fn test_line_break_is_fixed() {
        assert_eq!(sniff("a\nb").line_break, "\r\n");
        assert_eq!(sniff("a\r\nb").line_break, "\r\n");
        assert_eq!(sniff("").indent, "  ");
    }

    #[test]
    fn test_sniff_is_pure() {
        let text = "export interface A {\n  foo: number;\n}";
        assert_eq!(sniff(text), sniff(text));
    }

    #[test]
    fn test_overrides() {
        let style = sniff("").with_line_break(LineBreak::Lf).with_indent(4);
        assert_eq!(style.line_break, "\n");
        assert_eq!(style.indent, "    ");
    }
}

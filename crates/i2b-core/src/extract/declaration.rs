use std::sync::LazyLock;

use regex::Regex;

use crate::error::BuilderError;

/// Literal marker that must appear in a document before anything is extracted.
pub const DECLARATION_MARKER: &str = "export interface";

/// First word after `export interface` and at least one whitespace character.
static DECLARATION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bexport interface\s+([0-9A-Za-z_]+)").expect("pattern should be valid")
});

/// A word immediately followed by `(`, optionally through the `?` marker.
static CALLABLE_MEMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9A-Za-z_]\??\(").expect("pattern should be valid"));

/// Whether the body declares a method-shaped member such as `foo(bar: string): string`.
pub fn has_unsupported_member(text: &str) -> bool {
    CALLABLE_MEMBER.is_match(text)
}

pub fn ensure_exported_declaration(text: &str) -> Result<(), BuilderError> {
    if text.contains(DECLARATION_MARKER) {
        Ok(())
    } else {
        Err(BuilderError::NotADeclaration)
    }
}

/// Extract the name of the first exported interface in `text`.
pub fn extract_name(text: &str) -> Result<String, BuilderError> {
    DECLARATION_NAME
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(BuilderError::NoDeclaration)
}

/// Derive the builder's base name from an interface name.
///
/// A leading `I` is dropped by pattern alone: `ITest` becomes `Test`, and so
/// does `Item` become `tem`.
pub fn base_name(name: &str) -> &str {
    name.strip_prefix('I').unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_name() {
        let text = "export interface ITest {\n  foo: string\n}";
        assert_eq!(extract_name(text).unwrap(), "ITest");
    }

    #[test]
    fn test_extract_name_skips_leading_imports() {
        let text = "import { Bar } from './bar'\n\nexport interface Foo {\n  bar: Bar\n}";
        assert_eq!(extract_name(text).unwrap(), "Foo");
    }

    #[test]
    fn test_extract_name_takes_first_declaration() {
        let text = "export interface A {\n}\nexport interface B {\n}";
        assert_eq!(extract_name(text).unwrap(), "A");
    }

    #[test]
    fn test_extract_name_allows_wider_whitespace_gap() {
        assert_eq!(
            extract_name("export interface  Foo {\n  foo: string\n}").unwrap(),
            "Foo"
        );
        assert_eq!(extract_name("export interface\n\tBar {}").unwrap(), "Bar");
        assert_eq!(extract_name("foo"), Err(BuilderError::NoDeclaration));
    }

    #[test]
    fn test_extract_name_not_inside_other_word() {
        assert_eq!(
            extract_name("reexport interface Foo {}"),
            Err(BuilderError::NoDeclaration)
        );
    }

    #[test]
    fn test_ensure_exported_declaration() {
        assert!(ensure_exported_declaration("export interface A {}").is_ok());
        assert_eq!(
            ensure_exported_declaration("interface A {}"),
            Err(BuilderError::NotADeclaration)
        );
    }

    #[test]
    fn test_unsupported_member() {
        assert!(has_unsupported_member(
            "export interface ITest { foo(bar: string): string }"
        ));
        assert!(has_unsupported_member("export interface ITest {\n  foo?(): void\n}"));
    }

    #[test]
    fn test_function_typed_field_is_supported() {
        assert!(!has_unsupported_member(
            "export interface ITest {\n  onChange: (value: string) => void\n}"
        ));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("IFoo"), "Foo");
        assert_eq!(base_name("Foo"), "Foo");
        assert_eq!(base_name("Item"), "tem");
        assert_eq!(base_name("I"), "");
    }
}

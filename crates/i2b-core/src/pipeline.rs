//! The orchestrator: checks each precondition in turn, generates the builder
//! and hands it to the host.
//!
//! Every invocation reports exactly one message through the host, either the
//! first failure or the saved path.

use serde::Serialize;

use crate::GeneratedFile;
use crate::assemble::assemble;
use crate::config::BuilderConfig;
use crate::defaults::default_for;
use crate::error::BuilderError;
use crate::extract::{
    FieldEntry, FieldExtractor, PatternExtractor, base_name, ensure_exported_declaration,
    extract_name, has_unsupported_member,
};
use crate::host::{Document, Host, UserMessage};
use crate::naming::{output_path, strip_optional_marker};
use crate::style::{StyleProfile, sniff};

/// Everything extracted from a document before assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub base_name: String,
    pub style: StyleProfile,
    pub fields: Vec<FieldEntry>,
}

/// Run the generator against the host's active document with the pattern extractor.
pub fn execute<H: Host>(
    host: &mut H,
    config: &BuilderConfig,
) -> Result<GeneratedFile, BuilderError> {
    execute_with(host, config, &PatternExtractor)
}

/// Run the generator with an explicit field extractor.
pub fn execute_with<H, E>(
    host: &mut H,
    config: &BuilderConfig,
    extractor: &E,
) -> Result<GeneratedFile, BuilderError>
where
    H: Host,
    E: FieldExtractor,
{
    match run(host, config, extractor) {
        Ok(file) => {
            host.show_message(UserMessage::info(format!(
                "Builder class saved to: {}",
                file.path
            )));
            Ok(file)
        }
        Err(err) => {
            log::debug!("builder generation stopped: {err:?}");
            host.show_message(err.message());
            Err(err)
        }
    }
}

fn run<H, E>(
    host: &mut H,
    config: &BuilderConfig,
    extractor: &E,
) -> Result<GeneratedFile, BuilderError>
where
    H: Host,
    E: FieldExtractor,
{
    if host.workspace_root().is_empty() {
        return Err(BuilderError::NoWorkspace);
    }
    let document = host.active_document().ok_or(BuilderError::NoEditor)?;

    let file = generate(&document, config, extractor)?;

    log::debug!("writing {} bytes to {}", file.content.len(), file.path);
    host.write_file(&file.path, &file.content).map_err(|err| {
        log::warn!("failed to write {}: {err}", file.path);
        BuilderError::WriteFailed(err.to_string())
    })?;
    Ok(file)
}

/// Produce the builder file for `document` without any host interaction.
pub fn generate<E: FieldExtractor>(
    document: &Document,
    config: &BuilderConfig,
    extractor: &E,
) -> Result<GeneratedFile, BuilderError> {
    let declaration = analyze(&document.text, config, extractor)?;
    let content = assemble(
        &declaration.base_name,
        &declaration.name,
        &declaration.fields,
        &declaration.style,
    );
    Ok(GeneratedFile {
        path: output_path(&document.path),
        content,
    })
}

/// Run the text checks and extraction stages, in order, on raw document text.
pub fn analyze<E: FieldExtractor>(
    text: &str,
    config: &BuilderConfig,
    extractor: &E,
) -> Result<Declaration, BuilderError> {
    if text.is_empty() {
        return Err(BuilderError::NoText);
    }
    if has_unsupported_member(text) {
        return Err(BuilderError::UnsupportedMember);
    }
    ensure_exported_declaration(text)?;

    let style = config.apply(sniff(text));
    log::debug!("style: terminator {:?}", style.statement_terminator);

    let name = extract_name(text)?;
    let fields = extractor.extract_fields(text)?;
    log::debug!("interface {name} with {} fields", fields.len());

    let base_name = if config.strip_interface_prefix {
        base_name(&name).to_string()
    } else {
        name.clone()
    };

    Ok(Declaration {
        name,
        base_name,
        style,
        fields,
    })
}

/// One row of an [`Inspection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectedField {
    pub property: String,
    pub optional: bool,
    pub type_expression: String,
    pub default_value: &'static str,
}

/// What the generator would build from a document, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub interface: String,
    pub builder: String,
    pub statement_terminator: String,
    pub fields: Vec<InspectedField>,
}

/// Summarize a document's declaration without generating any text.
pub fn inspect(text: &str, config: &BuilderConfig) -> Result<Inspection, BuilderError> {
    let declaration = analyze(text, config, &PatternExtractor)?;
    let fields = declaration
        .fields
        .iter()
        .map(|field| InspectedField {
            property: strip_optional_marker(&field.name),
            optional: field.name.ends_with('?'),
            type_expression: field.type_expression.clone(),
            default_value: default_for(&field.type_expression),
        })
        .collect();

    Ok(Inspection {
        builder: format!("{}Builder", declaration.base_name),
        interface: declaration.name,
        statement_terminator: declaration.style.statement_terminator,
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "export interface IPerson {\n  name: string;\n  age?: number;\n}\n";

    #[test]
    fn test_analyze() {
        let declaration = analyze(TEXT, &BuilderConfig::default(), &PatternExtractor).unwrap();
        assert_eq!(declaration.name, "IPerson");
        assert_eq!(declaration.base_name, "Person");
        assert_eq!(declaration.style.statement_terminator, ";");
        assert_eq!(declaration.fields.len(), 2);
    }

    #[test]
    fn test_analyze_keeps_prefix_when_configured() {
        let config = BuilderConfig {
            strip_interface_prefix: false,
            ..BuilderConfig::default()
        };
        let declaration = analyze(TEXT, &config, &PatternExtractor).unwrap();
        assert_eq!(declaration.base_name, "IPerson");
    }

    #[test]
    fn test_analyze_order_of_checks() {
        let config = BuilderConfig::default();
        assert_eq!(analyze("", &config, &PatternExtractor), Err(BuilderError::NoText));
        // A method is reported even when the marker is missing too.
        assert_eq!(
            analyze("interface A { run(): void }", &config, &PatternExtractor),
            Err(BuilderError::UnsupportedMember)
        );
        assert_eq!(
            analyze("interface A {\n  foo: string\n}", &config, &PatternExtractor),
            Err(BuilderError::NotADeclaration)
        );
        assert_eq!(
            analyze("export interface {\n  foo: string\n}", &config, &PatternExtractor),
            Err(BuilderError::NoDeclaration)
        );
    }

    #[test]
    fn test_analyze_accepts_wider_gap_after_marker() {
        let text = "export interface  Foo {\n  foo: string\n}";
        let declaration = analyze(text, &BuilderConfig::default(), &PatternExtractor).unwrap();
        assert_eq!(declaration.name, "Foo");
        assert_eq!(declaration.base_name, "Foo");
    }

    #[test]
    fn test_generate_derives_path() {
        let document = Document {
            path: "src/person.interface.ts".to_string(),
            text: TEXT.to_string(),
        };
        let file = generate(&document, &BuilderConfig::default(), &PatternExtractor).unwrap();
        assert_eq!(file.path, "src/person.interface.builder.ts");
        assert!(file.content.starts_with("export class PersonBuilder {\r\n"));
    }

    #[test]
    fn test_inspect() {
        let inspection = inspect(TEXT, &BuilderConfig::default()).unwrap();
        assert_eq!(inspection.interface, "IPerson");
        assert_eq!(inspection.builder, "PersonBuilder");
        assert_eq!(
            inspection.fields[1],
            InspectedField {
                property: "age".to_string(),
                optional: true,
                type_expression: "number".to_string(),
                default_value: "1",
            }
        );
    }

    #[test]
    fn test_inspection_serializes() {
        let inspection = inspect(TEXT, &BuilderConfig::default()).unwrap();
        let value = serde_json::to_value(&inspection).unwrap();
        assert_eq!(value["builder"], "PersonBuilder");
        assert_eq!(value["fields"][0]["property"], "name");
        assert_eq!(value["fields"][0]["default_value"], "undefined");
    }
}

use std::sync::LazyLock;

use regex::Regex;

use super::{FieldEntry, FieldExtractor};
use crate::error::BuilderError;

/// A run of word characters ending in one non-space character, directly before `:`.
static PROPERTY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9A-Za-z_]*\S):").expect("pattern should be valid"));

/// Everything after `:` and one whitespace character, up to a line break or `;`.
static DATA_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s([^\n\r;]+)").expect("pattern should be valid"));

/// Find every property name in `text`, in source order.
pub fn extract_property_names(text: &str) -> Result<Vec<String>, BuilderError> {
    let names: Vec<String> = PROPERTY_NAME
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect();

    if names.is_empty() {
        return Err(BuilderError::NoProperties);
    }
    Ok(names)
}

/// Find every property type expression in `text`, in source order.
pub fn extract_data_types(text: &str) -> Result<Vec<String>, BuilderError> {
    let types: Vec<String> = DATA_TYPE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    if types.is_empty() {
        return Err(BuilderError::NoDataTypes);
    }
    Ok(types)
}

/// Pair names with types by position.
///
/// Both scans run over the same text independently; differing counts mean at
/// least one pairing would be wrong, so nothing is paired.
pub fn zip_fields(names: Vec<String>, types: Vec<String>) -> Result<Vec<FieldEntry>, BuilderError> {
    if names.len() != types.len() {
        return Err(BuilderError::FieldTypeMismatch {
            properties: names.len(),
            data_types: types.len(),
        });
    }

    Ok(names
        .into_iter()
        .zip(types)
        .map(|(name, type_expression)| FieldEntry {
            name,
            type_expression,
        })
        .collect())
}

/// Regular-expression field extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl FieldExtractor for PatternExtractor {
    fn extract_fields(&self, text: &str) -> Result<Vec<FieldEntry>, BuilderError> {
        let names = extract_property_names(text)?;
        let types = extract_data_types(text)?;
        log::debug!("found {} properties and {} data types", names.len(), types.len());
        zip_fields(names, types)
    }
}

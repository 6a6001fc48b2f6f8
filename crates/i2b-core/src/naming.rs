/// Optional-property marker in interface field names.
pub const OPTIONAL_MARKER: char = '?';

/// Uppercase the first character, leaving the rest untouched.
pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Remove the optional marker from a property name.
pub fn strip_optional_marker(name: &str) -> String {
    name.replace(OPTIONAL_MARKER, "")
}

/// Sibling path for the builder of the document at `document_path`.
///
/// File names already using dotted segments (`bar.interface.ts`) get
/// `.builder` (`bar.interface.builder.ts`); plain ones (`bar.ts`) get
/// `Builder` (`barBuilder.ts`). Both `/` and `\` separate directories, and
/// whichever separator the input used is kept.
pub fn output_path(document_path: &str) -> String {
    let (dir, file_name) = match document_path.rfind(['/', '\\']) {
        Some(idx) => (Some(&document_path[..=idx]), &document_path[idx + 1..]),
        None => (None, document_path),
    };

    let (stem, extension) = match file_name.rfind('.') {
        Some(idx) if idx > 0 => (&file_name[..idx], &file_name[idx + 1..]),
        _ => (file_name, "ts"),
    };

    let suffix = if stem.contains('.') { ".builder" } else { "Builder" };
    let builder_file = format!("{stem}{suffix}.{extension}");

    match dir {
        Some(dir) => format!("{dir}{builder_file}"),
        None => builder_file,
    }
}

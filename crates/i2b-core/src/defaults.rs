/// Initial value for a builder property of the given TypeScript type.
///
/// Arrays start empty, `number` starts at `1`, `boolean` at `false`. Everything
/// else, `string` included, starts as `undefined`. Only exact matches count:
/// `Array<number>` or `number | null` fall through to `undefined`.
pub fn default_for(type_expression: &str) -> &'static str {
    if type_expression.contains("[]") {
        return "[]";
    }

    match type_expression {
        "string" => "undefined",
        "number" => "1",
        "boolean" => "false",
        _ => "undefined",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(default_for("string"), "undefined");
        assert_eq!(default_for("number"), "1");
        assert_eq!(default_for("boolean"), "false");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(default_for("string[]"), "[]");
        assert_eq!(default_for("number[][]"), "[]");
        assert_eq!(default_for("(string | number)[]"), "[]");
    }

    #[test]
    fn test_unknown_types() {
        assert_eq!(default_for("Date"), "undefined");
        assert_eq!(default_for("Array<number>"), "undefined");
        assert_eq!(default_for("number | null"), "undefined");
        assert_eq!(default_for(""), "undefined");
    }
}

use minijinja::{Environment, context};

use crate::defaults::default_for;
use crate::extract::FieldEntry;
use crate::naming::{strip_optional_marker, uppercase_first};
use crate::style::StyleProfile;

/// Per-property fragments of a builder class, index-aligned with the fields
/// they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyOutput {
    /// `private foo: string = undefined`
    pub definitions: Vec<String>,
    /// `foo: this.foo`, one entry of the object literal returned by `build()`.
    pub local_setters: Vec<String>,
    /// `public withFoo(value: string) { ... }`
    pub external_setters: Vec<String>,
}

/// Build the three fragments for every field.
pub fn generate_property_output(fields: &[FieldEntry], style: &StyleProfile) -> PropertyOutput {
    let t = &style.indent;
    let b = &style.line_break;
    let e = &style.statement_terminator;

    let mut output = PropertyOutput::default();
    for field in fields {
        let data_type = &field.type_expression;
        let value = default_for(data_type);
        let setter_name = strip_optional_marker(&uppercase_first(&field.name));
        let property = strip_optional_marker(&field.name);

        output
            .definitions
            .push(format!("private {property}: {data_type} = {value}{e}"));
        output
            .local_setters
            .push(format!("{property}: this.{property}"));
        output.external_setters.push(
            [
                format!("public with{setter_name}(value: {data_type}) {{{b}"),
                format!("{t}{t}this.{property} = value{e}{b}"),
                format!("{t}{t}return this{e}{b}"),
                format!("{t}}}"),
            ]
            .concat(),
        );
    }
    output
}

/// Compose the full builder class text from `templates/builder.ts.j2`.
///
/// `build()` returns `interface_name` itself; the class is
/// named `{class_name}Builder`.
pub fn generate_class(
    interface_name: &str,
    class_name: &str,
    output: &PropertyOutput,
    style: &StyleProfile,
) -> String {
    let mut env = Environment::new();
    env.add_template("builder.ts.j2", include_str!("../templates/builder.ts.j2"))
        .expect("template should be valid");
    let tmpl = env
        .get_template("builder.ts.j2")
        .expect("template should be registered");

    tmpl.render(context! {
        class_name => class_name,
        interface_name => interface_name,
        definitions => &output.definitions,
        local_setters => &output.local_setters,
        external_setters => &output.external_setters,
        b => &style.line_break,
        t => &style.indent,
        e => &style.statement_terminator,
    })
    .expect("render should succeed")
}

/// Generate the builder class for a declaration in one step.
pub fn assemble(
    base_name: &str,
    declaration_name: &str,
    fields: &[FieldEntry],
    style: &StyleProfile,
) -> String {
    let output = generate_property_output(fields, style);
    generate_class(declaration_name, base_name, &output, style)
}

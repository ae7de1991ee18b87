//! Lowering of the `graphql-parser` document into the [`schema`](crate::schema) tree.
//!
//! `graphql-parser` reports 1-based line/column positions; they are turned
//! into byte spans here so every later diagnostic can point into the source.

use graphql_parser::{
    Pos,
    schema::{self as gql, Definition, TypeDefinition},
};
use log::{debug, trace};

use crate::{
    error::{Diagnostic, ErrorCode},
    schema::{
        Argument, ArgumentValue, Directive, FieldDefinition, ObjectDefinition, Schema,
        TypeReference,
    },
    span::{LineIndex, Span},
};

type Document<'a> = gql::Document<'a, String>;

/// Parse `source` with `graphql-parser`, mapping syntax errors to an
/// [`ErrorCode::E100`] diagnostic.
pub(crate) fn parse_document(source: &str) -> Result<Document<'_>, Diagnostic> {
    gql::parse_schema::<String>(source).map_err(|err| syntax_error(source, &err.to_string()))
}

/// Keep the object type definitions of `document`, in order.
pub(crate) fn lower_document(source: &str, document: Document<'_>) -> Schema {
    let index = LineIndex::new(source);
    let mut objects = Vec::new();
    let mut skipped = 0;

    for definition in document.definitions {
        match definition {
            Definition::TypeDefinition(TypeDefinition::Object(object)) => {
                trace!(name = object.name.as_str(); "Lowering object type");
                objects.push(lower_object(&index, object));
            }
            other => {
                debug!(kind = definition_kind(&other); "Skipping non-object definition");
                skipped += 1;
            }
        }
    }

    Schema::new(source, objects, skipped)
}

fn lower_object(index: &LineIndex<'_>, object: gql::ObjectType<'_, String>) -> ObjectDefinition {
    let keyword = index.find_after(object.position.line, object.position.column, "type");
    let span = index.find_from(keyword.end(), &object.name);

    let fields = object
        .fields
        .into_iter()
        .map(|field| lower_field(index, field))
        .collect();

    ObjectDefinition::new(object.name, span, fields)
}

fn lower_field(index: &LineIndex<'_>, field: gql::Field<'_, String>) -> FieldDefinition {
    let span = index.find_after(field.position.line, field.position.column, &field.name);
    let directives = field
        .directives
        .into_iter()
        .map(|directive| lower_directive(index, directive))
        .collect();

    FieldDefinition::new(field.name, span, lower_type(field.field_type), directives)
}

fn lower_directive(index: &LineIndex<'_>, directive: gql::Directive<'_, String>) -> Directive {
    let at = index.char_at(offset(index, directive.position));
    let span = at.union(index.find_from(at.end(), &directive.name));
    let arguments = directive
        .arguments
        .into_iter()
        .map(|(name, value)| Argument::new(name, lower_value(value)))
        .collect();

    Directive::new(directive.name, span, arguments)
}

fn lower_type(ty: gql::Type<'_, String>) -> TypeReference {
    match ty {
        gql::Type::NamedType(name) => TypeReference::Named(name),
        gql::Type::ListType(inner) => TypeReference::List(Box::new(lower_type(*inner))),
        gql::Type::NonNullType(inner) => TypeReference::NonNull(Box::new(lower_type(*inner))),
    }
}

fn lower_value(value: gql::Value<'_, String>) -> ArgumentValue {
    match value {
        gql::Value::String(text) => ArgumentValue::String(text),
        gql::Value::Enum(name) => ArgumentValue::Enum(name),
        gql::Value::Int(number) => ArgumentValue::Int(number.as_i64().unwrap_or_default()),
        gql::Value::Float(number) => ArgumentValue::Float(number),
        gql::Value::Boolean(flag) => ArgumentValue::Boolean(flag),
        gql::Value::Null => ArgumentValue::Null,
        gql::Value::Variable(name) => ArgumentValue::Variable(name),
        gql::Value::List(items) => ArgumentValue::List(items.into_iter().map(lower_value).collect()),
        gql::Value::Object(entries) => ArgumentValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key, lower_value(value)))
                .collect(),
        ),
    }
}

fn offset(index: &LineIndex<'_>, position: Pos) -> usize {
    index.offset(position.line, position.column)
}

fn definition_kind(definition: &Definition<'_, String>) -> &'static str {
    match definition {
        Definition::SchemaDefinition(_) => "schema",
        Definition::TypeDefinition(TypeDefinition::Scalar(_)) => "scalar",
        Definition::TypeDefinition(TypeDefinition::Object(_)) => "object",
        Definition::TypeDefinition(TypeDefinition::Interface(_)) => "interface",
        Definition::TypeDefinition(TypeDefinition::Union(_)) => "union",
        Definition::TypeDefinition(TypeDefinition::Enum(_)) => "enum",
        Definition::TypeDefinition(TypeDefinition::InputObject(_)) => "input",
        Definition::TypeExtension(_) => "extension",
        Definition::DirectiveDefinition(_) => "directive",
    }
}

/// Build the syntax diagnostic from `graphql-parser`'s rendered error.
///
/// The message has the shape
/// `schema parse error: Parse error at LINE:COLUMN` followed by one line per
/// unexpected/expected item.
fn syntax_error(source: &str, rendered: &str) -> Diagnostic {
    let index = LineIndex::new(source);
    let mut lines = rendered.lines();
    let header = lines.next().unwrap_or_default();

    let span = error_position(header)
        .map(|(line, column)| index.char_at(index.offset(line, column)))
        .unwrap_or_else(|| Span::new(source.len()..source.len()));

    let details: Vec<&str> = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let label = if details.is_empty() {
        "unexpected input".to_string()
    } else {
        details.join("; ")
    };

    Diagnostic::error(ErrorCode::E100.description())
        .with_code(ErrorCode::E100)
        .with_label(span, label)
}

fn error_position(header: &str) -> Option<(usize, usize)> {
    let (_, position) = header.rsplit_once(" at ")?;
    let (line, column) = position.trim().split_once(':')?;
    Some((line.parse().ok()?, column.parse().ok()?))
}

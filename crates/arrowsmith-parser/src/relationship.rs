//! Reading the arguments of a `@relationship` directive.

use arrowsmith_core::model::Direction;

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    schema::{ArgumentValue, Directive, FieldDefinition, RELATIONSHIP_DIRECTIVE},
};

const DIRECTION_ARGUMENT: &str = "direction";
const TYPE_ARGUMENT: &str = "type";

const DIRECTIVE_HELP: &str = "write the directive as `@relationship(type: \"LABEL\", direction: OUT)`";

/// What a `@relationship` directive says about its edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipSpec {
    direction: Direction,
    type_label: String,
}

impl RelationshipSpec {
    pub fn new(direction: Direction, type_label: impl Into<String>) -> Self {
        Self {
            direction,
            type_label: type_label.into(),
        }
    }

    /// Direction relative to the declaring type.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Label of the relationship, taken verbatim from the `type` argument.
    pub fn type_label(&self) -> &str {
        &self.type_label
    }
}

impl FieldDefinition {
    /// Read the first `@relationship` directive of this field.
    ///
    /// `direction: OUT` yields [`Direction::Outgoing`]; any other direction
    /// value yields [`Direction::Incoming`].
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::E302`] if the field has no `@relationship` directive,
    ///   or the directive lacks its `type` or `direction` argument.
    /// - [`ErrorCode::E303`] if `type` is not a string literal, or
    ///   `direction` is neither a string nor an enum value.
    pub fn relationship_spec(&self) -> Result<RelationshipSpec> {
        let Some(directive) = self.directive(RELATIONSHIP_DIRECTIVE) else {
            return Err(Diagnostic::error(format!(
                "field `{}` has no `@{RELATIONSHIP_DIRECTIVE}` directive",
                self.name()
            ))
            .with_code(ErrorCode::E302)
            .with_label(self.span(), "expected a relationship field")
            .with_help(DIRECTIVE_HELP));
        };

        let direction =
            argument_text(self, directive, DIRECTION_ARGUMENT, ArgumentValue::as_text)?;
        let type_label = argument_text(self, directive, TYPE_ARGUMENT, ArgumentValue::as_string)?;

        Ok(RelationshipSpec::new(
            Direction::from_directive_value(direction),
            type_label,
        ))
    }
}

fn argument_text<'a>(
    field: &FieldDefinition,
    directive: &'a Directive,
    name: &str,
    read: fn(&ArgumentValue) -> Option<&str>,
) -> Result<&'a str> {
    let Some(argument) = directive.argument(name) else {
        return Err(Diagnostic::error(format!(
            "`@{RELATIONSHIP_DIRECTIVE}` on field `{}` is missing the `{name}` argument",
            field.name()
        ))
        .with_code(ErrorCode::E302)
        .with_label(directive.span(), format!("`{name}` is required"))
        .with_secondary_label(field.span(), "on this field")
        .with_help(DIRECTIVE_HELP));
    };

    read(argument.value()).ok_or_else(|| {
        Diagnostic::error(format!(
            "`{name}` argument of `@{RELATIONSHIP_DIRECTIVE}` on field `{}` must be a string, found {}",
            field.name(),
            argument.value().kind()
        ))
        .with_code(ErrorCode::E303)
        .with_label(directive.span(), "invalid argument value")
        .with_help(DIRECTIVE_HELP)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        schema::{Argument, TypeReference},
        span::Span,
    };

    fn relationship_field(directives: Vec<Directive>) -> FieldDefinition {
        FieldDefinition::new(
            "friends",
            Span::new(10..17),
            TypeReference::named("Person").list(),
            directives,
        )
    }

    fn relationship(arguments: Vec<Argument>) -> Directive {
        Directive::new(RELATIONSHIP_DIRECTIVE, Span::new(30..43), arguments)
    }

    fn string(value: &str) -> ArgumentValue {
        ArgumentValue::String(value.to_string())
    }

    fn enum_value(value: &str) -> ArgumentValue {
        ArgumentValue::Enum(value.to_string())
    }

    #[test]
    fn test_outgoing_relationship() {
        let field = relationship_field(vec![relationship(vec![
            Argument::new("type", string("KNOWS")),
            Argument::new("direction", enum_value("OUT")),
        ])]);

        let spec = field.relationship_spec().unwrap();
        assert_eq!(spec, RelationshipSpec::new(Direction::Outgoing, "KNOWS"));
    }

    #[test]
    fn test_string_direction_is_accepted() {
        let field = relationship_field(vec![relationship(vec![
            Argument::new("direction", string("OUT")),
            Argument::new("type", string("KNOWS")),
        ])]);

        assert_eq!(
            field.relationship_spec().unwrap().direction(),
            Direction::Outgoing
        );
    }

    #[test]
    fn test_non_out_direction_is_incoming() {
        for direction in ["IN", "in", "BOTH", ""] {
            let field = relationship_field(vec![relationship(vec![
                Argument::new("type", string("KNOWS")),
                Argument::new("direction", enum_value(direction)),
            ])]);

            assert_eq!(
                field.relationship_spec().unwrap().direction(),
                Direction::Incoming,
                "direction {direction:?}"
            );
        }
    }

    #[test]
    fn test_first_directive_wins() {
        let field = relationship_field(vec![
            relationship(vec![
                Argument::new("type", string("FIRST")),
                Argument::new("direction", enum_value("OUT")),
            ]),
            relationship(vec![
                Argument::new("type", string("SECOND")),
                Argument::new("direction", enum_value("IN")),
            ]),
        ]);

        let spec = field.relationship_spec().unwrap();
        assert_eq!(spec.type_label(), "FIRST");
        assert_eq!(spec.direction(), Direction::Outgoing);
    }

    #[test]
    fn test_missing_directive() {
        let field = relationship_field(vec![]);

        let diag = field.relationship_spec().unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E302));
        assert_eq!(diag.primary_span(), Some(Span::new(10..17)));
    }

    #[test]
    fn test_missing_type_argument() {
        let field = relationship_field(vec![relationship(vec![Argument::new(
            "direction",
            enum_value("OUT"),
        )])]);

        let diag = field.relationship_spec().unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E302));
        assert!(diag.message().contains("`type`"));
        assert_eq!(diag.primary_span(), Some(Span::new(30..43)));
    }

    #[test]
    fn test_missing_direction_argument() {
        let field = relationship_field(vec![relationship(vec![Argument::new(
            "type",
            string("KNOWS"),
        )])]);

        let diag = field.relationship_spec().unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E302));
        assert!(diag.message().contains("`direction`"));
    }

    #[test]
    fn test_non_text_argument_value() {
        let field = relationship_field(vec![relationship(vec![
            Argument::new("type", ArgumentValue::Int(3)),
            Argument::new("direction", enum_value("OUT")),
        ])]);

        let diag = field.relationship_spec().unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E303));
        assert!(diag.message().ends_with("found integer"));
    }

    #[test]
    fn test_enum_type_label_is_rejected() {
        let field = relationship_field(vec![relationship(vec![
            Argument::new("type", enum_value("KNOWS")),
            Argument::new("direction", enum_value("OUT")),
        ])]);

        let diag = field.relationship_spec().unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E303));
        assert!(diag.message().starts_with("`type` argument"));
        assert!(diag.message().ends_with("found enum value"));
    }
}

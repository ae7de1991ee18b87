//! Typed definition tree for the parts of a schema Arrowsmith uses.
//!
//! Only object type definitions are kept. Each carries its fields in
//! declaration order, each field its type reference and directives, and
//! everything carries a [`Span`] back into the source so later phases can
//! point diagnostics at the offending text.

use std::fmt;

use crate::span::Span;

/// Name of the field directive that turns a field into a relationship.
pub const RELATIONSHIP_DIRECTIVE: &str = "relationship";

/// The object types of one schema document.
#[derive(Debug, Clone)]
pub struct Schema {
    source: String,
    objects: Vec<ObjectDefinition>,
    skipped: usize,
}

impl Schema {
    /// Creates a schema from already lowered object definitions.
    ///
    /// # Arguments
    ///
    /// * `source` - The schema text the spans of `objects` refer to.
    /// * `objects` - Object type definitions in document order.
    /// * `skipped` - Number of top-level definitions that were not object types.
    pub fn new(source: impl Into<String>, objects: Vec<ObjectDefinition>, skipped: usize) -> Self {
        Self {
            source: source.into(),
            objects,
            skipped,
        }
    }

    /// The schema text this tree was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Object type definitions in document order.
    pub fn objects(&self) -> &[ObjectDefinition] {
        &self.objects
    }

    /// How many top-level definitions were ignored because they are not
    /// object types.
    pub fn skipped_definitions(&self) -> usize {
        self.skipped
    }
}

/// A `type Name { ... }` definition.
#[derive(Debug, Clone)]
pub struct ObjectDefinition {
    name: String,
    span: Span,
    fields: Vec<FieldDefinition>,
}

impl ObjectDefinition {
    pub fn new(name: impl Into<String>, span: Span, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            span,
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Span of the type's name.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }
}

/// One field of an object type.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    name: String,
    span: Span,
    type_ref: TypeReference,
    directives: Vec<Directive>,
}

impl FieldDefinition {
    pub fn new(
        name: impl Into<String>,
        span: Span,
        type_ref: TypeReference,
        directives: Vec<Directive>,
    ) -> Self {
        Self {
            name: name.into(),
            span,
            type_ref,
            directives,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Span of the field's name.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn type_ref(&self) -> &TypeReference {
        &self.type_ref
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// First directive with the given name.
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives
            .iter()
            .find(|directive| directive.name() == name)
    }

    /// Returns `true` if the field carries a `@relationship` directive.
    pub fn is_relationship(&self) -> bool {
        self.directive(RELATIONSHIP_DIRECTIVE).is_some()
    }
}

/// The declared type of a field, with its list and non-null wrappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeReference {
    /// `Name`
    Named(String),
    /// `[inner]`
    List(Box<TypeReference>),
    /// `inner!`
    NonNull(Box<TypeReference>),
}

impl TypeReference {
    /// Shorthand for a bare named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps this type in a list.
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Wraps this type in a non-null marker.
    pub fn non_null(self) -> Self {
        Self::NonNull(Box::new(self))
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// A directive applied to a field, e.g. `@relationship(type: "KNOWS")`.
#[derive(Debug, Clone)]
pub struct Directive {
    name: String,
    span: Span,
    arguments: Vec<Argument>,
}

impl Directive {
    pub fn new(name: impl Into<String>, span: Span, arguments: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            span,
            arguments,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Span from the `@` through the directive name.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// First argument with the given name.
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments
            .iter()
            .find(|argument| argument.name() == name)
    }
}

/// A `name: value` pair of a directive.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    name: String,
    value: ArgumentValue,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: ArgumentValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }
}

/// A constant or variable value written as a directive argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    String(String),
    Enum(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    Null,
    Variable(String),
    List(Vec<ArgumentValue>),
    Object(Vec<(String, ArgumentValue)>),
}

impl ArgumentValue {
    /// The text of a string literal or bare enum value.
    ///
    /// Directive arguments such as `direction: OUT` are written as enum
    /// values, so both count as text here.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::String(text) | Self::Enum(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The text of a string literal only.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Human readable kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Enum(_) => "enum value",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Null => "null",
            Self::Variable(_) => "variable",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

//! Base type name resolution.
//!
//! A field's type may be wrapped in at most one list and non-null marker on
//! each side of the list: `T`, `[T]`, `T!`, `[T]!`, `[T!]` and `[T!]!`. Each of
//! these resolves to `T`. Anything deeper, such as `[[T]]`, is rejected
//! instead of guessed at.

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    schema::{FieldDefinition, TypeReference},
};

impl TypeReference {
    /// The innermost named type, or `None` for an unsupported nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrowsmith_parser::TypeReference;
    ///
    /// let ty = TypeReference::named("String").non_null().list().non_null();
    /// assert_eq!(ty.base_name(), Some("String"));
    ///
    /// let nested = TypeReference::named("String").list().list();
    /// assert_eq!(nested.base_name(), None);
    /// ```
    pub fn base_name(&self) -> Option<&str> {
        match self {
            TypeReference::Named(name) => Some(name.as_str()),
            // `T!`, `[T]!`, `[T!]!`
            TypeReference::NonNull(inner) => match inner.as_ref() {
                TypeReference::Named(name) => Some(name.as_str()),
                TypeReference::List(item) => item.list_item_name(),
                TypeReference::NonNull(_) => None,
            },
            // `[T]`, `[T!]`
            TypeReference::List(item) => item.list_item_name(),
        }
    }

    /// Name of a list's item type, which may itself be non-null.
    fn list_item_name(&self) -> Option<&str> {
        match self {
            TypeReference::Named(name) => Some(name.as_str()),
            TypeReference::NonNull(inner) => match inner.as_ref() {
                TypeReference::Named(name) => Some(name.as_str()),
                _ => None,
            },
            TypeReference::List(_) => None,
        }
    }
}

impl FieldDefinition {
    /// Resolve the base type name of this field.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorCode::E200`] diagnostic pointing at the field when
    /// its type nests wrappers beyond `[T!]!`.
    pub fn base_type_name(&self) -> Result<&str> {
        self.type_ref().base_name().ok_or_else(|| {
            Diagnostic::error(format!(
                "field `{}` has unsupported type `{}`",
                self.name(),
                self.type_ref()
            ))
            .with_code(ErrorCode::E200)
            .with_label(self.span(), "type nests lists too deeply")
            .with_help("use one of `T`, `[T]`, `T!`, `[T]!`, `[T!]` or `[T!]!`")
        })
    }
}

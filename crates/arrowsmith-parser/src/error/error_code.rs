//! Error codes for the Arrowsmith diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Syntax errors
//! - `E2xx` - Type errors
//! - `E3xx` - Relationship and model errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E1xx)
    // =========================================================================
    /// Invalid schema syntax.
    ///
    /// The text is not a valid GraphQL schema document.
    E100,

    // =========================================================================
    // Type Errors (E2xx)
    // =========================================================================
    /// Unsupported type shape.
    ///
    /// A field type nests list and non-null wrappers deeper than
    /// `[T!]!`, for example `[[String]]`.
    E200,

    // =========================================================================
    // Relationship Errors (E3xx)
    // =========================================================================
    /// Unresolved relationship target.
    ///
    /// A relationship field points at a type that is not defined as an
    /// object type in the schema.
    E300,

    /// Duplicate type definition.
    ///
    /// Two object types share a name. Only reported when duplicate types
    /// are rejected.
    E301,

    /// Malformed relationship directive.
    ///
    /// The `@relationship` directive or one of its `type` and `direction`
    /// arguments is missing.
    E302,

    /// Invalid directive argument value.
    ///
    /// A `@relationship` argument is not a string or enum value.
    E303,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E200 => "E200",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "invalid schema syntax",
            ErrorCode::E200 => "unsupported type shape",
            ErrorCode::E300 => "unresolved relationship target",
            ErrorCode::E301 => "duplicate type definition",
            ErrorCode::E302 => "malformed relationship directive",
            ErrorCode::E303 => "invalid directive argument value",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

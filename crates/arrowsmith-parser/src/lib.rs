//! # Arrowsmith Parser
//!
//! GraphQL schema front end for Arrowsmith. This crate reads schema
//! definition language text and exposes the object types, fields and
//! `@relationship` directives the graph builder needs, with byte spans for
//! diagnostics.
//!
//! ## Usage
//!
//! ```
//! # use arrowsmith_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         type Person {
//!             name: String
//!             movies: [Movie!]! @relationship(type: "ACTED_IN", direction: OUT)
//!         }
//!         type Movie { title: String }
//!     "#;
//!
//!     let schema = parse(source)?;
//!     assert_eq!(schema.objects().len(), 2);
//!     Ok(())
//! }
//! ```

pub mod error;

mod classify;
mod lower;
mod relationship;
mod resolve;
mod schema;
mod span;

pub use relationship::RelationshipSpec;
pub use schema::{
    Argument, ArgumentValue, Directive, FieldDefinition, ObjectDefinition,
    RELATIONSHIP_DIRECTIVE, Schema, TypeReference,
};
pub use span::Span;

use log::debug;

use error::ParseError;

/// Parse schema text into its object type definitions.
///
/// Definitions other than object types (scalars, enums, interfaces, unions,
/// input objects, extensions and directive declarations) are accepted and
/// skipped.
///
/// # Errors
///
/// Returns a [`ParseError`] holding an [`error::ErrorCode::E100`] diagnostic
/// when `source` is not valid GraphQL schema syntax.
///
/// # Example
///
/// ```
/// # use arrowsmith_parser::parse;
/// let schema = parse("scalar Date\ntype Event { at: Date }").unwrap();
/// assert_eq!(schema.objects()[0].name(), "Event");
/// assert_eq!(schema.skipped_definitions(), 1);
///
/// assert!(parse("type Broken {").is_err());
/// ```
pub fn parse(source: &str) -> Result<Schema, ParseError> {
    let document = lower::parse_document(source)?;
    let schema = lower::lower_document(source, document);

    debug!(
        objects = schema.objects().len(),
        skipped = schema.skipped_definitions();
        "Schema parsed"
    );
    Ok(schema)
}

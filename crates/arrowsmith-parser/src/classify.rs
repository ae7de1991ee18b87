//! Splitting an object's fields into properties and relationships.

use crate::schema::{FieldDefinition, ObjectDefinition};

impl ObjectDefinition {
    /// Partition the fields into `(properties, relationships)`.
    ///
    /// A field is a relationship when it carries a `@relationship`
    /// directive. Every field lands in exactly one side and declaration
    /// order is kept within each.
    ///
    /// # Examples
    ///
    /// ```
    /// let schema = arrowsmith_parser::parse(r#"
    ///     type Person {
    ///         name: String
    ///         friends: [Person!]! @relationship(type: "KNOWS", direction: OUT)
    ///         age: Int
    ///     }
    /// "#).unwrap();
    ///
    /// let (properties, relationships) = schema.objects()[0].classify_fields();
    /// let properties: Vec<_> = properties.iter().map(|f| f.name()).collect();
    /// let relationships: Vec<_> = relationships.iter().map(|f| f.name()).collect();
    /// assert_eq!(properties, ["name", "age"]);
    /// assert_eq!(relationships, ["friends"]);
    /// ```
    pub fn classify_fields(&self) -> (Vec<&FieldDefinition>, Vec<&FieldDefinition>) {
        let (relationships, properties): (Vec<_>, Vec<_>) = self
            .fields()
            .iter()
            .partition(|field| field.is_relationship());
        (properties, relationships)
    }
}

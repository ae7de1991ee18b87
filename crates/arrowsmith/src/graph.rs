//! Graph model assembly.
//!
//! Turns the object definitions of a parsed [`Schema`] into a
//! [`GraphModel`]: one node per object type, one relationship per
//! `@relationship` field. Every problem found along the way is collected so a
//! failing build reports all bad fields at once; a build either returns a
//! complete model or none.

use std::collections::HashMap;

use log::{debug, info, trace};

use arrowsmith_core::{
    identifier::{DEFAULT_ID_LENGTH, Id, IdGenerator},
    model::{Graph, GraphModel, GraphNode, GraphRelationship, Properties},
};
use arrowsmith_parser::{
    FieldDefinition, ObjectDefinition, Schema,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
};

use crate::{
    config::{AppConfig, DEFAULT_DIAGRAM_NAME},
    layout::{self, Engine},
};

/// Object definitions by name, with their node identifiers.
type NodeTable<'s> = HashMap<&'s str, (&'s ObjectDefinition, &'s Id)>;

/// Upper bound on the identifiers a build of `schema` draws: one per object
/// type and one per relationship field.
pub(crate) fn required_ids(schema: &Schema) -> u64 {
    schema
        .objects()
        .iter()
        .map(|object| {
            let relationships = object.fields().iter().filter(|f| f.is_relationship()).count();
            1 + relationships as u64
        })
        .sum()
}

/// Builds [`GraphModel`]s from parsed schemas.
///
/// # Examples
///
/// ```
/// use arrowsmith::{GraphBuilder, identifier::SequentialIdGenerator, layout::FanOutEngine};
///
/// let schema = arrowsmith_parser::parse(r#"
///     type A { name: String, b: B @relationship(type: "REL", direction: OUT) }
///     type B { name: String }
/// "#).unwrap();
///
/// let builder = GraphBuilder::new(Box::new(FanOutEngine::new(400.0)));
/// let model = builder.build(&schema, &mut SequentialIdGenerator::new()).unwrap();
///
/// assert_eq!(model.graph().nodes().len(), 2);
/// assert_eq!(model.graph().relationships()[0].kind(), "REL");
/// ```
pub struct GraphBuilder {
    engine: Box<dyn Engine>,
    id_length: usize,
    diagram_name: String,
    reject_duplicate_types: bool,
}

impl GraphBuilder {
    /// Create a builder placing nodes with `engine`, with default
    /// identifier length, diagram name and duplicate handling.
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self {
            engine,
            id_length: DEFAULT_ID_LENGTH,
            diagram_name: DEFAULT_DIAGRAM_NAME.to_string(),
            reject_duplicate_types: false,
        }
    }

    /// Create a builder from every relevant configuration section.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(layout::engine_for(config.layout()))
            .with_id_length(config.identifiers().length())
            .with_diagram_name(config.export().diagram_name())
            .with_reject_duplicate_types(config.schema().reject_duplicate_types())
    }

    /// Set the number of characters per generated identifier.
    pub fn with_id_length(mut self, id_length: usize) -> Self {
        self.id_length = id_length;
        self
    }

    /// Set the `diagramName` of built models.
    pub fn with_diagram_name(mut self, diagram_name: impl Into<String>) -> Self {
        self.diagram_name = diagram_name.into();
        self
    }

    /// Fail with [`ErrorCode::E301`] on duplicate type names instead of
    /// letting the later definition shadow the earlier one.
    pub fn with_reject_duplicate_types(mut self, reject: bool) -> Self {
        self.reject_duplicate_types = reject;
        self
    }

    /// Build the graph model of `schema`.
    ///
    /// Node identifiers are drawn first, one per object type in document
    /// order; relationship identifiers follow as relationships are emitted.
    ///
    /// # Errors
    ///
    /// Returns every error diagnostic of the run:
    /// - [`ErrorCode::E200`] for a field type nested beyond `[T!]!`
    /// - [`ErrorCode::E300`] for a relationship whose target type is not defined
    /// - [`ErrorCode::E301`] for a duplicate type name, when rejected
    /// - [`ErrorCode::E302`] and [`ErrorCode::E303`] for malformed directives
    pub fn build(
        &self,
        schema: &Schema,
        ids: &mut dyn IdGenerator,
    ) -> Result<GraphModel, ParseError> {
        let objects = schema.objects();
        let count = objects.len();
        info!(objects = count; "Building graph model");

        let mut collector = DiagnosticCollector::new();

        let node_ids: Vec<Id> = objects.iter().map(|_| ids.next_id(self.id_length)).collect();
        let nodes = self.node_table(objects, &node_ids, &mut collector);

        let mut graph = Graph::new();
        for (index, (object, node_id)) in objects.iter().zip(&node_ids).enumerate() {
            let position = self.engine.position(index, count);
            let (property_fields, relationship_fields) = object.classify_fields();

            let mut properties = Properties::new();
            for field in property_fields {
                match field.base_type_name() {
                    Ok(type_name) => {
                        properties.insert(field.name().to_string(), type_name.to_string());
                    }
                    Err(diagnostic) => collector.emit(diagnostic),
                }
            }

            debug!(
                caption = object.name(),
                id:% = node_id,
                properties = properties.len(),
                relationships = relationship_fields.len();
                "Adding node"
            );
            graph.push_node(GraphNode::new(
                node_id.clone(),
                object.name(),
                position,
                properties,
            ));

            for field in relationship_fields {
                match self.relationship(field, node_id, &nodes, ids) {
                    Ok(relationship) => graph.push_relationship(relationship),
                    Err(diagnostic) => collector.emit(diagnostic),
                }
            }
        }

        collector.finish()?;

        let model = GraphModel::new(self.diagram_name.clone(), graph);
        info!(
            nodes = model.graph().nodes().len(),
            relationships = model.graph().relationships().len();
            "Graph model built"
        );
        trace!(model:?; "Built graph model");
        Ok(model)
    }

    /// Map each type name to its definition and node id. A later
    /// definition replaces an earlier one of the same name.
    fn node_table<'s>(
        &self,
        objects: &'s [ObjectDefinition],
        node_ids: &'s [Id],
        collector: &mut DiagnosticCollector,
    ) -> NodeTable<'s> {
        let mut nodes = NodeTable::with_capacity(objects.len());
        for (object, node_id) in objects.iter().zip(node_ids) {
            if let Some((earlier, _)) = nodes.insert(object.name(), (object, node_id)) {
                debug!(name = object.name(); "Duplicate type definition");
                collector.emit(self.duplicate_type(object, earlier));
            }
        }
        nodes
    }

    fn duplicate_type(&self, object: &ObjectDefinition, earlier: &ObjectDefinition) -> Diagnostic {
        let diagnostic = if self.reject_duplicate_types {
            Diagnostic::error(format!(
                "type `{}` is defined multiple times",
                object.name()
            ))
            .with_code(ErrorCode::E301)
        } else {
            Diagnostic::warning(format!(
                "type `{}` shadows an earlier definition",
                object.name()
            ))
        };

        diagnostic
            .with_label(object.span(), "duplicate definition")
            .with_secondary_label(earlier.span(), "first defined here")
            .with_help("relationships to this name resolve to the last definition")
    }

    fn relationship(
        &self,
        field: &FieldDefinition,
        declaring: &Id,
        nodes: &NodeTable<'_>,
        ids: &mut dyn IdGenerator,
    ) -> Result<GraphRelationship, Diagnostic> {
        let target_name = field.base_type_name()?;
        let Some(&(_, target)) = nodes.get(target_name) else {
            return Err(Diagnostic::error(format!(
                "relationship target `{target_name}` is not defined"
            ))
            .with_code(ErrorCode::E300)
            .with_label(field.span(), format!("points at `{target_name}`"))
            .with_help(format!(
                "define `type {target_name} {{ ... }}` or fix the field type"
            )));
        };

        let spec = field.relationship_spec()?;
        let (from_id, to_id) = spec.direction().orient(declaring, target);

        let relationship = GraphRelationship::new(
            ids.next_id(self.id_length),
            from_id.clone(),
            to_id.clone(),
            spec.type_label(),
        );
        trace!(
            field = field.name(),
            kind = spec.type_label(),
            direction:% = spec.direction();
            "Adding relationship"
        );
        Ok(relationship)
    }
}

#[cfg(test)]
mod tests {
    use arrowsmith_core::identifier::SequentialIdGenerator;

    use super::*;
    use crate::layout::FanOutEngine;

    fn builder() -> GraphBuilder {
        GraphBuilder::new(Box::new(FanOutEngine::new(400.0))).with_id_length(4)
    }

    fn build(source: &str) -> Result<GraphModel, ParseError> {
        let schema = arrowsmith_parser::parse(source).unwrap();
        builder().build(&schema, &mut SequentialIdGenerator::new())
    }

    #[test]
    fn test_empty_schema() {
        let model = build("scalar Date").unwrap();

        assert!(model.graph().nodes().is_empty());
        assert!(model.graph().relationships().is_empty());
        assert_eq!(model.diagram_name(), DEFAULT_DIAGRAM_NAME);
    }

    #[test]
    fn test_node_ids_precede_relationship_ids() {
        let model = build(
            r#"
            type A { b: B @relationship(type: "REL", direction: OUT) }
            type B { a: A @relationship(type: "REL", direction: OUT) }
            "#,
        )
        .unwrap();

        let graph = model.graph();
        assert_eq!(graph.nodes()[0].id(), "AAAA");
        assert_eq!(graph.nodes()[1].id(), "AAAB");
        assert_eq!(graph.relationships()[0].id(), "AAAC");
        assert_eq!(graph.relationships()[1].id(), "AAAD");
    }

    #[test]
    fn test_incoming_relationship_is_reversed() {
        let model = build(
            r#"
            type Movie { actors: [Person!]! @relationship(type: "ACTED_IN", direction: IN) }
            type Person { name: String }
            "#,
        )
        .unwrap();

        let graph = model.graph();
        let movie = graph.node_by_caption("Movie").unwrap();
        let person = graph.node_by_caption("Person").unwrap();
        let acted_in = &graph.relationships()[0];

        assert_eq!(acted_in.from_id(), person.id());
        assert_eq!(acted_in.to_id(), movie.id());
        assert_eq!(acted_in.kind(), "ACTED_IN");
        assert!(acted_in.properties().is_empty());
        assert!(movie.properties().is_empty());
    }

    #[test]
    fn test_self_relationship() {
        let model = build(
            r#"type Person { friends: [Person] @relationship(type: "KNOWS", direction: OUT) }"#,
        )
        .unwrap();

        let graph = model.graph();
        let relationship = &graph.relationships()[0];
        assert_eq!(relationship.from_id(), graph.nodes()[0].id());
        assert_eq!(relationship.to_id(), graph.nodes()[0].id());
    }

    #[test]
    fn test_unresolved_target_fails_whole_build() {
        let err = build(
            r#"
            type A { name: String, b: Missing @relationship(type: "REL", direction: OUT) }
            type B { name: String }
            "#,
        )
        .unwrap_err();

        let unresolved: Vec<_> = err.with_code(ErrorCode::E300).collect();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(
            unresolved[0].message(),
            "relationship target `Missing` is not defined"
        );
    }

    #[test]
    fn test_all_errors_are_reported() {
        let err = build(
            r#"
            type A {
                grid: [[Int]]
                b: Nope @relationship(type: "REL", direction: OUT)
                c: A @relationship(direction: OUT)
                d: A @relationship(type: 7, direction: OUT)
            }
            "#,
        )
        .unwrap_err();

        let codes: Vec<_> = err
            .diagnostics()
            .iter()
            .filter_map(|diagnostic| diagnostic.code())
            .collect();
        assert_eq!(
            codes,
            [ErrorCode::E200, ErrorCode::E300, ErrorCode::E302, ErrorCode::E303]
        );
    }

    #[test]
    fn test_duplicate_type_shadows_by_default() {
        let model = build(
            r#"
            type A { b: B @relationship(type: "REL", direction: OUT) }
            type B { first: String }
            type B { second: String }
            "#,
        )
        .unwrap();

        let graph = model.graph();
        assert_eq!(graph.nodes().len(), 3);
        assert_eq!(graph.relationships()[0].to_id(), graph.nodes()[2].id());
    }

    #[test]
    fn test_duplicate_type_rejected_when_strict() {
        let schema = arrowsmith_parser::parse("type B { a: String }\ntype B { b: String }").unwrap();
        let err = builder()
            .with_reject_duplicate_types(true)
            .build(&schema, &mut SequentialIdGenerator::new())
            .unwrap_err();

        let duplicates: Vec<_> = err.with_code(ErrorCode::E301).collect();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].labels().len(), 2);
    }

    #[test]
    fn test_custom_diagram_name() {
        let schema = arrowsmith_parser::parse("type A { a: ID }").unwrap();
        let model = builder()
            .with_diagram_name("movies")
            .build(&schema, &mut SequentialIdGenerator::new())
            .unwrap();

        assert_eq!(model.diagram_name(), "movies");
        assert_eq!(model.graph().nodes()[0].id().len(), 4);
    }
}

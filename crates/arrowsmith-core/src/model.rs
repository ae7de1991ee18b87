//! The arrows.app graph model.
//!
//! These types mirror the JSON document the arrows.app import URL accepts.
//! They are produced by the model builder in the `arrowsmith` crate and
//! serialized by its export backends; nothing mutates a model after it has
//! been built.
//!
//! # Pipeline Position
//!
//! ```text
//! Schema Text
//!     ↓ parse (arrowsmith-parser)
//! Object Definitions
//!     ↓ build (arrowsmith)
//! GraphModel (these types)
//!     ↓ export
//! JSON / import URL
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{geometry::Point, identifier::Id};

/// Property map of a node or relationship, in declaration order.
pub type Properties = IndexMap<String, String>;

/// Which way a relationship points relative to the field that declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From the declaring type to the field's type.
    Outgoing,
    /// From the field's type to the declaring type.
    Incoming,
}

impl Direction {
    /// Interprets a `direction` directive value.
    ///
    /// `OUT` is outgoing; every other value, including `IN`, is incoming.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrowsmith_core::model::Direction;
    ///
    /// assert_eq!(Direction::from_directive_value("OUT"), Direction::Outgoing);
    /// assert_eq!(Direction::from_directive_value("IN"), Direction::Incoming);
    /// assert_eq!(Direction::from_directive_value("out"), Direction::Incoming);
    /// ```
    pub fn from_directive_value(value: &str) -> Self {
        if value == "OUT" {
            Self::Outgoing
        } else {
            Self::Incoming
        }
    }

    /// Orders a `(declaring, target)` pair into `(from, to)`.
    pub fn orient<T>(self, declaring: T, target: T) -> (T, T) {
        match self {
            Self::Outgoing => (declaring, target),
            Self::Incoming => (target, declaring),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outgoing => write!(f, "OUT"),
            Self::Incoming => write!(f, "IN"),
        }
    }
}

/// A node of the diagram, one per object type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    id: Id,
    position: Point,
    caption: String,
    properties: Properties,
}

impl GraphNode {
    /// Creates a node.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier referenced by relationships.
    /// * `caption` - Text shown on the node, the object type's name.
    /// * `position` - Canvas position.
    /// * `properties` - Field name to base type name, for non-relationship fields.
    pub fn new(id: Id, caption: impl Into<String>, position: Point, properties: Properties) -> Self {
        Self {
            id,
            position,
            caption: caption.into(),
            properties,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// A directed, labeled edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRelationship {
    id: Id,
    from_id: Id,
    to_id: Id,
    #[serde(rename = "type")]
    kind: String,
    properties: Properties,
}

impl GraphRelationship {
    /// Creates a relationship with an empty property map.
    pub fn new(id: Id, from_id: Id, to_id: Id, kind: impl Into<String>) -> Self {
        Self {
            id,
            from_id,
            to_id,
            kind: kind.into(),
            properties: Properties::new(),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Identifier of the node the relationship starts at.
    pub fn from_id(&self) -> &Id {
        &self.from_id
    }

    /// Identifier of the node the relationship ends at.
    pub fn to_id(&self) -> &Id {
        &self.to_id
    }

    /// The relationship type label, e.g. `KNOWS`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// Nodes, relationships and the (always empty) style sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    relationships: Vec<GraphRelationship>,
    style: IndexMap<String, String>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node.
    pub fn push_node(&mut self, node: GraphNode) {
        self.nodes.push(node);
    }

    /// Appends a relationship.
    pub fn push_relationship(&mut self, relationship: GraphRelationship) {
        self.relationships.push(relationship);
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn relationships(&self) -> &[GraphRelationship] {
        &self.relationships
    }

    /// Looks up a node by identifier.
    pub fn node(&self, id: &Id) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Looks up the first node with the given caption.
    pub fn node_by_caption(&self, caption: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.caption() == caption)
    }

    /// Returns `true` if every relationship endpoint names a node of this graph.
    pub fn is_closed(&self) -> bool {
        self.relationships.iter().all(|relationship| {
            self.node(relationship.from_id()).is_some() && self.node(relationship.to_id()).is_some()
        })
    }
}

/// The complete document handed to arrows.app.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphModel {
    diagram_name: String,
    graph: Graph,
}

impl GraphModel {
    /// Creates a model from a diagram name and a finished graph.
    pub fn new(diagram_name: impl Into<String>, graph: Graph) -> Self {
        Self {
            diagram_name: diagram_name.into(),
            graph,
        }
    }

    pub fn diagram_name(&self) -> &str {
        &self.diagram_name
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

//! Arrowsmith - GraphQL schemas to arrows.app graph models.
//!
//! Reads GraphQL schema definition language, turns every object type into a
//! node and every `@relationship` field into a relationship, and exports the
//! result as the JSON document or import link understood by arrows.app.

pub mod config;
pub mod export;
pub mod layout;

mod error;
mod graph;

pub use arrowsmith_core::{geometry, identifier, model};
pub use arrowsmith_parser::Schema;

pub use error::ArrowsmithError;
pub use graph::GraphBuilder;

use log::{debug, info, trace};

use arrowsmith_core::{identifier::IdGenerator, model::GraphModel};

use config::AppConfig;
use export::{Exporter, Format, json::JsonExporter, url::UrlExporter};

/// Converter from schema text to exported graph models.
///
/// This provides an API for processing schemas through parsing, model
/// building, and export stages.
///
/// # Examples
///
/// ```rust
/// use arrowsmith::{Converter, config::AppConfig, export::Format};
///
/// let source = r#"
///     type Person {
///         name: String
///         movies: [Movie!]! @relationship(type: "ACTED_IN", direction: OUT)
///     }
///     type Movie { title: String }
/// "#;
///
/// let converter = Converter::new(AppConfig::default());
///
/// // Parse and build the graph model
/// let model = converter.convert(source).expect("Failed to convert");
/// assert_eq!(model.graph().relationships().len(), 1);
///
/// // Export it as an arrows.app import link
/// let url = converter.export(&model, Format::Url).expect("Failed to export");
/// assert!(url.starts_with("https://arrows.app/#/import/json="));
/// ```
#[derive(Debug, Default)]
pub struct Converter {
    config: AppConfig,
}

impl Converter {
    /// Create a new converter with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout, identifier
    ///   and export settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this converter.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse schema text into its object type definitions.
    ///
    /// # Errors
    ///
    /// Returns `ArrowsmithError::Parse` when the text is not valid schema
    /// syntax.
    pub fn parse(&self, source: &str) -> Result<Schema, ArrowsmithError> {
        info!(bytes = source.len(); "Parsing schema");

        let schema = arrowsmith_parser::parse(source)
            .map_err(|err| ArrowsmithError::new_parse_error(err, source))?;

        debug!("Schema parsed successfully");
        trace!(schema:?; "Parsed schema");
        Ok(schema)
    }

    /// Build the graph model of a parsed schema, drawing identifiers from
    /// the configured generator.
    ///
    /// # Errors
    ///
    /// Returns `ArrowsmithError::Config` for invalid configuration values,
    /// including an identifier length too short for the generator to issue
    /// distinct ids for every node and relationship, and
    /// `ArrowsmithError::Parse` with every diagnostic of the build otherwise.
    pub fn build_model(&self, schema: &Schema) -> Result<GraphModel, ArrowsmithError> {
        let mut ids = self.config.identifiers().generator();
        self.build_model_with(schema, ids.as_mut())
    }

    /// Build the graph model of a parsed schema with a caller supplied
    /// identifier generator.
    ///
    /// # Errors
    ///
    /// See [`Converter::build_model`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowsmith::{Converter, identifier::SequentialIdGenerator};
    ///
    /// let converter = Converter::default();
    /// let schema = converter.parse("type A { name: String }").unwrap();
    ///
    /// let mut ids = SequentialIdGenerator::new();
    /// let model = converter.build_model_with(&schema, &mut ids).unwrap();
    /// assert_eq!(model.graph().nodes()[0].id(), "AAAAAAAAAAAAAAAAAAAA");
    /// ```
    pub fn build_model_with(
        &self,
        schema: &Schema,
        ids: &mut dyn IdGenerator,
    ) -> Result<GraphModel, ArrowsmithError> {
        self.config.validate().map_err(ArrowsmithError::Config)?;

        let length = self.config.identifiers().length();
        let needed = graph::required_ids(schema);
        if ids.remaining(length).is_some_and(|remaining| remaining < needed) {
            return Err(ArrowsmithError::Config(format!(
                "identifiers.length = {length} is too short for the {needed} distinct identifiers this schema needs"
            )));
        }

        GraphBuilder::from_config(&self.config)
            .build(schema, ids)
            .map_err(|err| ArrowsmithError::new_parse_error(err, schema.source()))
    }

    /// Parse schema text and build its graph model.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Converter::parse`] and
    /// [`Converter::build_model`].
    pub fn convert(&self, source: &str) -> Result<GraphModel, ArrowsmithError> {
        let schema = self.parse(source)?;
        self.build_model(&schema)
    }

    /// Serialize a model in the requested format.
    ///
    /// JSON indentation and the import link prefix come from the export
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `ArrowsmithError::Export` when the model cannot be serialized.
    pub fn export(&self, model: &GraphModel, format: Format) -> Result<String, ArrowsmithError> {
        info!(format:%; "Exporting graph model");

        let export = self.config.export();
        let output = match format {
            Format::Json => JsonExporter::new(export.pretty()).export(model)?,
            Format::Url => UrlExporter::new(export.viewer_url()).export(model)?,
        };
        Ok(output)
    }
}

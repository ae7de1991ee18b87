//! Configuration types for Arrowsmith conversions.
//!
//! This module provides configuration structures that control how graph
//! models are laid out, identified and exported. All types implement
//! [`serde::Deserialize`] and every field has a default, so a partial
//! configuration file only needs the keys it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`LayoutConfig`] - Which [`LayoutEngine`] places the nodes, and how far apart.
//! - [`IdentifierConfig`] - Length and [`IdStrategy`] of generated identifiers.
//! - [`SchemaConfig`] - How strictly the schema is interpreted.
//! - [`ExportConfig`] - Diagram name and output formatting.
//!
//! # Example
//!
//! ```
//! # use arrowsmith::config::{AppConfig, LayoutEngine};
//! let config = AppConfig::default();
//! assert_eq!(config.layout().engine(), LayoutEngine::FanOut);
//! assert_eq!(config.layout().spacing(), 400.0);
//! assert_eq!(config.export().diagram_name(), "@neo4j/graphql");
//! ```

use std::fmt;

use serde::Deserialize;

use arrowsmith_core::identifier::{
    DEFAULT_ID_LENGTH, IdGenerator, RandomIdGenerator, SequentialIdGenerator,
};

/// Diagram name arrows.app shows for imported GraphQL models.
pub const DEFAULT_DIAGRAM_NAME: &str = "@neo4j/graphql";

/// Prefix of the arrows.app import link; the base64 payload is appended.
pub const DEFAULT_VIEWER_URL: &str = "https://arrows.app/#/import/json=";

/// Distance between neighbouring nodes when none is configured.
pub const DEFAULT_SPACING: f64 = 400.0;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Identifier configuration section.
    #[serde(default)]
    identifiers: IdentifierConfig,

    /// Schema interpretation section.
    #[serde(default)]
    schema: SchemaConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        layout: LayoutConfig,
        identifiers: IdentifierConfig,
        schema: SchemaConfig,
        export: ExportConfig,
    ) -> Self {
        Self {
            layout,
            identifiers,
            schema,
            export,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the identifier configuration.
    pub fn identifiers(&self) -> &IdentifierConfig {
        &self.identifiers
    }

    /// Returns the schema configuration.
    pub fn schema(&self) -> &SchemaConfig {
        &self.schema
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Replaces the export section.
    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }

    /// Checks values serde cannot reject on its own.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending key when the layout spacing is
    /// not a positive finite number or the identifier length is zero.
    ///
    /// The sequential strategy issues at most `62^length` distinct ids. That
    /// depends on the schema, so [`crate::Converter`] checks it per build.
    pub fn validate(&self) -> Result<(), String> {
        let spacing = self.layout.spacing;
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(format!(
                "layout.spacing must be a positive number, got {spacing}"
            ));
        }
        if self.identifiers.length == 0 {
            return Err("identifiers.length must be at least 1".to_string());
        }
        Ok(())
    }
}

/// The node placement strategies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEngine {
    /// Diagonal fan-out from the first node (default).
    #[default]
    FanOut,
    /// Rows of `ceil(sqrt(N))` columns.
    Grid,
}

impl From<LayoutEngine> for &'static str {
    fn from(val: LayoutEngine) -> Self {
        match val {
            LayoutEngine::FanOut => "fan_out",
            LayoutEngine::Grid => "grid",
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = (*self).into();
        write!(f, "{name}")
    }
}

/// Layout engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// The [`LayoutEngine`] placing nodes.
    #[serde(default)]
    engine: LayoutEngine,

    /// Step between neighbouring positions.
    #[serde(default = "default_spacing")]
    spacing: f64,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `engine` - Placement strategy.
    /// * `spacing` - Step between neighbouring positions.
    pub fn new(engine: LayoutEngine, spacing: f64) -> Self {
        Self { engine, spacing }
    }

    /// Returns the configured [`LayoutEngine`].
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    /// Returns the spacing between neighbouring positions.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(LayoutEngine::default(), DEFAULT_SPACING)
    }
}

/// How identifiers are produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Uniformly random characters (default).
    #[default]
    Random,
    /// A base-62 counter, for reproducible output.
    Sequential,
}

/// Identifier generation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentifierConfig {
    /// Characters per identifier.
    #[serde(default = "default_id_length")]
    length: usize,

    /// Generation strategy.
    #[serde(default)]
    strategy: IdStrategy,

    /// Seed for the random strategy; unseeded when absent.
    #[serde(default)]
    seed: Option<u64>,
}

impl IdentifierConfig {
    /// Creates a new [`IdentifierConfig`].
    pub fn new(length: usize, strategy: IdStrategy, seed: Option<u64>) -> Self {
        Self {
            length,
            strategy,
            seed,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Creates the generator this configuration describes.
    ///
    /// The seed only applies to [`IdStrategy::Random`].
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match (self.strategy, self.seed) {
            (IdStrategy::Random, None) => Box::new(RandomIdGenerator::new()),
            (IdStrategy::Random, Some(seed)) => Box::new(RandomIdGenerator::seeded(seed)),
            (IdStrategy::Sequential, _) => Box::new(SequentialIdGenerator::new()),
        }
    }
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH, IdStrategy::default(), None)
    }
}

/// Schema interpretation options.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SchemaConfig {
    /// Fail instead of shadowing when two object types share a name.
    #[serde(default)]
    reject_duplicate_types: bool,
}

impl SchemaConfig {
    pub fn new(reject_duplicate_types: bool) -> Self {
        Self {
            reject_duplicate_types,
        }
    }

    /// Returns `true` if duplicate type names are an error.
    pub fn reject_duplicate_types(&self) -> bool {
        self.reject_duplicate_types
    }
}

/// Export options.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_diagram_name")]
    diagram_name: String,

    #[serde(default = "default_viewer_url")]
    viewer_url: String,

    /// Indent JSON output.
    #[serde(default)]
    pretty: bool,
}

impl ExportConfig {
    /// Creates a new [`ExportConfig`].
    ///
    /// # Arguments
    ///
    /// * `diagram_name` - Name stored in the model's `diagramName`.
    /// * `viewer_url` - Prefix of generated import links.
    /// * `pretty` - Whether JSON output is indented.
    pub fn new(diagram_name: impl Into<String>, viewer_url: impl Into<String>, pretty: bool) -> Self {
        Self {
            diagram_name: diagram_name.into(),
            viewer_url: viewer_url.into(),
            pretty,
        }
    }

    pub fn diagram_name(&self) -> &str {
        &self.diagram_name
    }

    pub fn viewer_url(&self) -> &str {
        &self.viewer_url
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Overrides JSON indentation.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGRAM_NAME, DEFAULT_VIEWER_URL, false)
    }
}

fn default_spacing() -> f64 {
    DEFAULT_SPACING
}

fn default_id_length() -> usize {
    DEFAULT_ID_LENGTH
}

fn default_diagram_name() -> String {
    DEFAULT_DIAGRAM_NAME.to_string()
}

fn default_viewer_url() -> String {
    DEFAULT_VIEWER_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.layout().engine(), LayoutEngine::FanOut);
        assert_eq!(config.layout().spacing(), DEFAULT_SPACING);
        assert_eq!(config.identifiers().length(), DEFAULT_ID_LENGTH);
        assert_eq!(config.identifiers().strategy(), IdStrategy::Random);
        assert_eq!(config.identifiers().seed(), None);
        assert!(!config.schema().reject_duplicate_types());
        assert_eq!(config.export().diagram_name(), DEFAULT_DIAGRAM_NAME);
        assert_eq!(config.export().viewer_url(), DEFAULT_VIEWER_URL);
        assert!(!config.export().pretty());
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            engine = "grid"

            [identifiers]
            strategy = "sequential"
            length = 8

            [export]
            pretty = true
            "#,
        )
        .unwrap();

        assert_eq!(config.layout().engine(), LayoutEngine::Grid);
        assert_eq!(config.layout().spacing(), DEFAULT_SPACING);
        assert_eq!(config.identifiers().strategy(), IdStrategy::Sequential);
        assert_eq!(config.identifiers().length(), 8);
        assert!(config.export().pretty());
        assert_eq!(config.export().diagram_name(), DEFAULT_DIAGRAM_NAME);
    }

    #[test]
    fn test_unknown_engine_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[layout]\nengine = \"force\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_layout_engine_names() {
        assert_eq!(LayoutEngine::FanOut.to_string(), "fan_out");
        assert_eq!(LayoutEngine::Grid.to_string(), "grid");
    }

    #[test]
    fn test_validate() {
        assert!(AppConfig::default().validate().is_ok());

        let bad_spacing = AppConfig::new(
            LayoutConfig::new(LayoutEngine::Grid, 0.0),
            IdentifierConfig::default(),
            SchemaConfig::default(),
            ExportConfig::default(),
        );
        assert!(bad_spacing.validate().unwrap_err().contains("layout.spacing"));

        let bad_length = AppConfig::new(
            LayoutConfig::default(),
            IdentifierConfig::new(0, IdStrategy::Random, None),
            SchemaConfig::default(),
            ExportConfig::default(),
        );
        assert!(bad_length.validate().unwrap_err().contains("identifiers.length"));
    }

    #[test]
    fn test_sequential_generator_from_config() {
        let config = IdentifierConfig::new(4, IdStrategy::Sequential, Some(9));
        let mut ids = config.generator();

        assert_eq!(ids.next_id(config.length()), "AAAA");
        assert_eq!(ids.next_id(config.length()), "AAAB");
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let config = IdentifierConfig::new(12, IdStrategy::Random, Some(42));

        let first = config.generator().next_id(12);
        let second = config.generator().next_id(12);
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_pretty() {
        let config = AppConfig::default().with_export(ExportConfig::default().with_pretty(true));
        assert!(config.export().pretty());
    }
}

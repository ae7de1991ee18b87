use log::debug;

use arrowsmith_core::model::GraphModel;

use crate::export::{Error, Exporter};

/// Writes the model as the JSON document arrows.app imports.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    /// Create an exporter; `pretty` indents the output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, model: &GraphModel) -> Result<String, Error> {
        let json = if self.pretty {
            serde_json::to_string_pretty(model)?
        } else {
            serde_json::to_string(model)?
        };
        debug!(bytes = json.len(), pretty = self.pretty; "Exported JSON");
        Ok(json)
    }
}

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use log::debug;

use arrowsmith_core::model::GraphModel;

use crate::export::{Error, Exporter, json::JsonExporter};

/// Builds an arrows.app import link: the viewer URL followed by the
/// base64 of the compact JSON document.
#[derive(Debug, Clone)]
pub struct UrlExporter {
    viewer_url: String,
}

impl UrlExporter {
    pub fn new(viewer_url: impl Into<String>) -> Self {
        Self {
            viewer_url: viewer_url.into(),
        }
    }
}

impl Exporter for UrlExporter {
    fn export(&self, model: &GraphModel) -> Result<String, Error> {
        let json = JsonExporter::new(false).export(model)?;
        let url = format!("{}{}", self.viewer_url, BASE64.encode(json));
        debug!(bytes = url.len(); "Exported import URL");
        Ok(url)
    }
}

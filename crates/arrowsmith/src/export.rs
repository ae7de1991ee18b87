//! Serialization of finished graph models.
//!
//! Two backends implement [`Exporter`]: [`json::JsonExporter`] writes the
//! arrows.app import document and [`url::UrlExporter`] wraps that document
//! into an arrows.app import link.

pub mod json;
pub mod url;

use std::fmt;

use arrowsmith_core::model::GraphModel;

/// A backend turning a [`GraphModel`] into text.
pub trait Exporter {
    fn export(&self, model: &GraphModel) -> Result<String, Error>;
}

/// Output formats offered by the export backends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The arrows.app JSON document.
    #[default]
    Json,
    /// An arrows.app import link carrying the document.
    Url,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Url => write!(f, "url"),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Serialize(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(Format::Json.to_string(), "json");
        assert_eq!(Format::Url.to_string(), "url");
        assert_eq!(Format::default(), Format::Json);
    }
}

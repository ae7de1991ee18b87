//! Bridge from [`ArrowsmithError`] to miette reports.
//!
//! A failed conversion may carry many schema diagnostics; each one becomes
//! its own [`Reportable`] so miette renders a separate snippet per problem.
//! Errors without source locations become a single plain report.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, Severity as MietteSeverity, SourceSpan};

use arrowsmith::ArrowsmithError;
use arrowsmith_parser::{
    Span,
    error::{Diagnostic, Severity},
};

/// One renderable report.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A schema diagnostic with the source its spans point into.
    Schema {
        diagnostic: &'a Diagnostic,
        src: &'a str,
    },
    /// Any other failure.
    Plain(&'a ArrowsmithError),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema { diagnostic, .. } => f.write_str(diagnostic.message()),
            Self::Plain(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Schema { .. } => None,
            Self::Plain(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code: Box<dyn fmt::Display + 'a> = match self {
            Self::Schema { diagnostic, .. } => Box::new(diagnostic.code()?),
            Self::Plain(ArrowsmithError::Io(_)) => Box::new("arrowsmith::io"),
            Self::Plain(ArrowsmithError::Config(_)) => Box::new("arrowsmith::config"),
            Self::Plain(ArrowsmithError::Export(_)) => Box::new("arrowsmith::export"),
            Self::Plain(ArrowsmithError::Parse { .. }) => return None,
        };
        Some(code)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self {
            Self::Schema { diagnostic, .. } => Some(match diagnostic.severity() {
                Severity::Error => MietteSeverity::Error,
                Severity::Warning => MietteSeverity::Warning,
            }),
            Self::Plain(_) => None,
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::Schema { diagnostic, .. } => diagnostic
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>),
            Self::Plain(ArrowsmithError::Config(_)) => Some(Box::new(
                "check the file given with --config, ./arrowsmith/config.toml or the user config directory",
            )),
            Self::Plain(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Self::Schema { src, .. } => Some(src as &dyn miette::SourceCode),
            Self::Plain(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Self::Schema { diagnostic, .. } = self else {
            return None;
        };
        if diagnostic.labels().is_empty() {
            return None;
        }

        Some(Box::new(diagnostic.labels().iter().map(|label| {
            let span = source_span(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Split an error into the reports to render, one per schema diagnostic.
pub fn to_reportables(err: &ArrowsmithError) -> Vec<Reportable<'_>> {
    match err {
        ArrowsmithError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diagnostic| Reportable::Schema { diagnostic, src })
            .collect(),
        _ => vec![Reportable::Plain(err)],
    }
}

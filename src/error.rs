//! Error types for loading descriptor documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("YAML error: {message}")]
    Yaml { span: Option<Span>, message: String },

    #[error("expected a component mapping or a list of components, found {found}")]
    UnexpectedDocument { found: &'static str },
}

impl LoadError {
    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            LoadError::Yaml { span, .. } => span.as_ref(),
            LoadError::UnexpectedDocument { .. } => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a location fall back to the plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return format!("{}: {}", filename, self);
        };
        let end = span.end.min(source.len());
        let start = span.start.min(end);

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, start..end))
                    .with_message("here")
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, self),
        }
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(err: serde_yaml::Error) -> Self {
        let span = err.location().map(|loc| loc.index()..loc.index() + 1);
        LoadError::Yaml {
            span,
            message: err.to_string(),
        }
    }
}

//! Error types for the INVO report renderer.
//!
//! `ReportError` is the closed set of things that can go wrong while building
//! or writing a report. `GenerationError` is what `HtmlReportRenderer` hands
//! back to callers: the same kind, prefixed with a localized failure message.

use std::path::PathBuf;

use crate::locale::Locale;

/// The underlying failure kinds for report generation.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A required scan record field was absent
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// I/O error (directory creation, file write, input read)
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// Template substitution or analysis annotation failed
    #[error("transform error: {0}")]
    Transform(String),

    /// JSON input could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ReportError
pub type ReportResult<T> = Result<T, ReportError>;

impl ReportError {
    /// Create an I/O error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a transform error
    pub fn transform(message: impl Into<String>) -> Self {
        Self::Transform(message.into())
    }
}

impl From<std::io::Error> for ReportError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

/// A report generation failure as seen by callers.
///
/// Displays as `"<localized prefix>: <cause>"`, e.g.
/// `Failed to generate report: missing required field 'analysis'`.
#[derive(Debug, thiserror::Error)]
#[error("{prefix}: {source}")]
pub struct GenerationError {
    prefix: &'static str,
    #[source]
    source: ReportError,
}

impl GenerationError {
    pub fn new(locale: Locale, source: ReportError) -> Self {
        Self {
            prefix: locale.record().failure_prefix,
            source,
        }
    }

    /// The localized prefix this error renders with
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn kind(&self) -> &ReportError {
        &self.source
    }

    pub fn into_kind(self) -> ReportError {
        self.source
    }
}

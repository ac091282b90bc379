//! YAML error types with source-annotated diagnostics

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors from reading or parsing a YAML document
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(YamlSyntaxError),

    #[error("Failed to read file: {0}")]
    #[diagnostic(code(fbd::yaml::io))]
    Io(#[from] std::io::Error),
}

/// A YAML document that could not be deserialized
#[derive(Debug, Error, Diagnostic)]
#[error("Invalid YAML in {filename}: {message}")]
#[diagnostic(
    code(fbd::yaml::syntax),
    help("see the data file format in the README")
)]
pub struct YamlSyntaxError {
    pub filename: String,
    pub message: String,
    /// 1-based line of the error, when known
    pub line: Option<usize>,

    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: Option<SourceSpan>,
}

impl YamlSyntaxError {
    /// Build a diagnostic from a serde_yml error and the document it came from
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let location = err.location();
        let span = location
            .as_ref()
            .map(|loc| SourceSpan::from((loc.index().min(content.len()), 0)));

        Self {
            filename: filename.to_string(),
            message: err.to_string(),
            line: location.as_ref().map(|loc| loc.line()),
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    }
}

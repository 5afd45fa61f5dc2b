//! Fatal error taxonomy for the binding layer.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for binding operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The one fatal schema condition: an operation without an id cannot be
    /// named in any target language.
    #[error("empty operation id is not allowed")]
    #[diagnostic(
        code(nib::empty_operation_id),
        help("every operation must declare a non-empty operationId")
    )]
    EmptyOperationId,

    #[error("failed to parse generation options")]
    #[diagnostic(code(nib::options_parse_error))]
    ParseOptions {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an options parse error from a toml error with source context
    pub fn parse_options(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ParseOptions {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_operation_id_message() {
        let err = Error::EmptyOperationId;
        assert_eq!(err.to_string(), "empty operation id is not allowed");
    }

    #[test]
    fn test_parse_options_keeps_source() {
        let bad = "naming_convention = ["; // unterminated array
        let err = toml::from_str::<toml::Value>(bad).unwrap_err();
        let boxed = Error::parse_options(err, bad, "options.toml");
        assert!(matches!(*boxed, Error::ParseOptions { .. }));
    }
}

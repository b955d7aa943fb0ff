use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for grammar operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the config file content and its display name so parse
/// errors can point at the offending byte.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    ///
    /// Errors raised while reading text carry a line and column; errors
    /// raised while mapping an already parsed value do not and get no label.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = span_for(&self.src, source.line(), source.column());
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Convert a 1-based line/column pair into a one-byte span.
fn span_for(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }

    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len());
    let len = usize::from(offset < src.len());
    Some(SourceSpan::from((offset, len)))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("module configuration is missing: {detail}")]
    #[diagnostic(
        code(resmap::config_missing),
        help(
            "create the config file, or supply both a default module prefix and a default module configuration"
        )
    )]
    Missing { detail: String },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(resmap::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse module configuration")]
    #[diagnostic(code(resmap::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid module configuration: {message}")]
    #[diagnostic(code(resmap::invalid_grammar))]
    Invalid {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl Error {
    /// Create a missing-configuration error
    pub fn missing(detail: impl Into<String>) -> Box<Self> {
        Box::new(Error::Missing {
            detail: detail.into(),
        })
    }

    /// Create an invalid-grammar error
    pub fn invalid(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Invalid {
            message: message.into(),
            help: None,
        })
    }

    /// Create an invalid-grammar error with a hint
    pub fn invalid_with_help(message: impl Into<String>, help: impl Into<String>) -> Box<Self> {
        Box::new(Error::Invalid {
            message: message.into(),
            help: Some(help.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_for_first_line() {
        let span = span_for("{ bad }", 1, 3).unwrap();
        assert_eq!(span.offset(), 2);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_span_for_later_line() {
        let src = "{\n  \"a\": ,\n}";
        let span = span_for(src, 2, 8).unwrap();
        assert_eq!(span.offset(), 9);
    }

    #[test]
    fn test_span_for_eof_is_empty() {
        let span = span_for("{", 1, 2).unwrap();
        assert_eq!(span.offset(), 1);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_span_for_value_errors() {
        assert!(span_for("{}", 0, 0).is_none());
    }
}

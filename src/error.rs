//! Error handling types for the tree builder and the path resolver
//!
//! Parsing failures carry a category, an optional line/column location and
//! free-form context. Query failures are plain values: they are expected
//! outcomes of asking a tree for something it does not contain.

use std::{error::Error, fmt};

use thiserror::Error;

/// Main error type for parsing operations
#[derive(Debug)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Additional context for the error
    context: Option<String>,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    IO(IOError),
    Syntax(SyntaxError),
    Security(SecurityError),
    Format(FormatError),
}

/// Structural problems in the document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The tokenizer rejected the input
    #[error("Malformed XML: {0}")]
    Malformed(String),
    /// An attribute could not be read or unescaped
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),
    /// Character data could not be unescaped
    #[error("Invalid text content: {0}")]
    InvalidText(String),
    /// The input holds no element at all
    #[error("Document has no root element")]
    MissingRoot,
    /// Input ended while an element was still open
    #[error("Element <{0}> is never closed")]
    UnclosedElement(String),
    /// A closing tag names a different element than the one open
    #[error("Closing tag </{found}> does not match <{expected}>")]
    MismatchedEndTag { expected: String, found: String },
    /// A closing tag at the top level with no element open
    #[error("Closing tag </{0}> has no open element")]
    UnexpectedEndTag(String),
}

/// Limits from [`ParserConfig`](crate::parser::config::ParserConfig)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecurityError {
    #[error("Maximum nesting depth ({0}) exceeded")]
    MaxDepthExceeded(usize),
    #[error("Maximum input size ({0} bytes) exceeded")]
    MaxSizeExceeded(usize),
    #[error("Maximum content length ({0} bytes) exceeded")]
    MaxContentLengthExceeded(usize),
    #[error("Maximum number of attributes ({0}) exceeded")]
    MaxAttributesExceeded(usize),
}

/// Output formatting errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid indentation: {0}")]
    InvalidIndentation(String),
}

/// IO operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IOError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
}

/// Failure to resolve a pattern against a tree.
///
/// Each variant names the step text (or index) that failed to match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The node being queried has no name, i.e. it came from a failed parse
    /// or is itself a synthesized attribute value.
    #[error("XML parse error: tree is empty")]
    EmptyTree,
    #[error("attribute {0} not found")]
    AttributeNotFound(String),
    #[error("invalid index format: {0}")]
    InvalidIndex(String),
    #[error("tag with index {0} not found")]
    IndexOutOfRange(i64),
    #[error("tag {0} not found")]
    TagNotFound(String),
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Computes the line and column of a byte offset into `input`.
    ///
    /// Offsets past the end, or inside a multi-byte character, are clamped
    /// back to the nearest preceding character boundary.
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let mut end = offset.min(input.len());
        while !input.is_char_boundary(end) {
            end -= 1;
        }
        let prefix = input.get(..end).unwrap_or_default();
        let line = prefix.matches('\n').count() + 1;
        let line_start = prefix.rfind('\n').map_or(0, |pos| pos + 1);
        let column = prefix.get(line_start..).unwrap_or_default().chars().count() + 1;
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            context: None,
            source: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        Self::new(ParseErrorKind::Syntax(err))
    }
}

impl From<SecurityError> for ParseError {
    fn from(err: SecurityError) -> Self {
        Self::new(ParseErrorKind::Security(err))
    }
}

impl From<IOError> for ParseError {
    fn from(err: IOError) -> Self {
        Self::new(ParseErrorKind::IO(err))
    }
}

impl From<FormatError> for ParseError {
    fn from(err: FormatError) -> Self {
        Self::new(ParseErrorKind::Format(err))
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IO(err) => write!(f, "{}", err),
            Self::Syntax(err) => write!(f, "{}", err),
            Self::Security(err) => write!(f, "{}", err),
            Self::Format(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "at {}: {}", loc, self.kind)?;
        } else {
            write!(f, "Error: {}", self.kind)?;
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(source) => Some(&**source),
            None => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

pub type QueryResult<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_offset() {
        let input = "<a>\n  <b/>\n</a>";
        assert_eq!(Location::from_offset(input, 0), Location::new(1, 1));
        assert_eq!(Location::from_offset(input, 6), Location::new(2, 3));
        assert_eq!(Location::from_offset(input, 999), Location::new(3, 5));
    }

    #[test]
    fn test_location_clamps_to_char_boundary() {
        let input = "<é/>";
        // byte 2 sits inside the two-byte 'é'
        assert_eq!(Location::from_offset(input, 2), Location::new(1, 2));
    }

    #[test]
    fn test_error_display_with_location_and_context() {
        let err = ParseError::from(SyntaxError::UnclosedElement("b".to_string()))
            .with_location(Location::new(2, 7))
            .with_context("while building <a>");
        let display = err.to_string();
        assert_eq!(
            display,
            "at line 2, column 7: Element <b> is never closed\nContext: while building <a>"
        );
    }

    #[test]
    fn test_error_display_without_location() {
        let err = ParseError::from(SecurityError::MaxDepthExceeded(4));
        assert_eq!(err.to_string(), "Error: Maximum nesting depth (4) exceeded");
        assert!(err.location().is_none());
    }

    #[test]
    fn test_query_error_messages() {
        assert_eq!(
            QueryError::TagNotFound("z".to_string()).to_string(),
            "tag z not found"
        );
        assert_eq!(
            QueryError::IndexOutOfRange(5).to_string(),
            "tag with index 5 not found"
        );
        assert_eq!(
            QueryError::InvalidIndex("x".to_string()).to_string(),
            "invalid index format: x"
        );
        assert_eq!(
            QueryError::AttributeNotFound("id".to_string()).to_string(),
            "attribute id not found"
        );
    }
}

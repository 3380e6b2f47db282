//! xmlpath: parse XML into a small owned tree and query it with paths
//!
//! This crate provides functionality to:
//! - Build a [`Node`] tree from an XML document
//! - Resolve `/`-separated path patterns against that tree (element names,
//!   `[N]` child positions and `@attr` attribute lookups)
//! - Report failures either in detail or as a zero-valued node
//!
//! # Examples
//! ```
//! use xmlpath::{parse, QueryError};
//!
//! let root = parse(r#"<a x="1"><b>hi</b><c/></a>"#);
//! assert_eq!(root.name, "a");
//! assert_eq!(root.find("b").content, "hi");
//! assert_eq!(root.find("@x").content, "1");
//! assert_eq!(root.find("[1]").name, "c");
//!
//! // `find` hides the reason; `query` reports it
//! assert!(root.find("z").is_zero());
//! assert_eq!(root.query("z"), Err(QueryError::TagNotFound("z".to_string())));
//! ```

use tracing::{debug, info, instrument, warn};

pub mod common;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod query;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use error::{
    IOError, ParseError, ParseErrorKind, QueryError, QueryResult, Result, SecurityError,
    SyntaxError,
};
pub use parser::{Node, ParserConfig, TreeBuilder};
pub use query::{resolve, Pattern, Step};

/// Parses `input` and returns the root element, or the zero node on any
/// failure. Use [`try_parse`] to learn why a document was rejected.
pub fn parse(input: &str) -> Node {
    try_parse(input).unwrap_or_else(|err| {
        warn!(error = %err, "parse failed, returning empty tree");
        Node::default()
    })
}

/// Parses `input` with the default limits.
pub fn try_parse(input: &str) -> Result<Node> {
    parse_with_config(input, ParserConfig::default())
}

/// Parses `input` with custom limits.
#[instrument(skip(input, config), fields(len = input.len()))]
pub fn parse_with_config(input: &str, config: ParserConfig) -> Result<Node> {
    let root = TreeBuilder::with_config(input, config).build()?;
    debug!(root = %root.name, children = root.children.len(), "parsed document");
    Ok(root)
}

#[instrument]
pub fn parse_file(path: &str) -> Result<Node> {
    debug!("Starting to parse file: {}", path);

    let content = utils::read_file(path)?;

    info!("File read successfully, building tree");

    let result = try_parse(&content).map_err(|e| e.with_context(format!("in file {}", path)));

    debug!("Parsing completed");
    result
}

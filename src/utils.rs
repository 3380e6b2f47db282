use std::fs;

use crate::{
    error::{IOError, ParseError, QueryResult, Result},
    formatter::{ContentFormatter, FormatConfig, Formatter, OutlineFormatter},
    parser::{Node, ParserConfig, TreeBuilder},
    query::{self, Pattern},
};

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IOError::FileNotFound(path.to_string()).into(),
        std::io::ErrorKind::PermissionDenied => {
            IOError::PermissionDenied(path.to_string()).into()
        }
        _ => ParseError::from(IOError::ReadError(e.to_string())).with_source(e),
    })
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => {
            IOError::PermissionDenied(path.to_string()).into()
        }
        _ => ParseError::from(IOError::WriteError(e.to_string())).with_source(e),
    })
}

pub fn parse_xml(content: &str, config: ParserConfig) -> Result<Node> {
    TreeBuilder::with_config(content, config).build()
}

/// Resolves `pattern` against `root` with the detailed resolver.
pub fn query_node(root: &Node, pattern: &str) -> QueryResult<Node> {
    query::resolve(root, &Pattern::parse(pattern)).map(|found| found.into_owned())
}

pub fn format_content(node: &Node) -> Result<String> {
    ContentFormatter.format(node, &FormatConfig::default())
}

pub fn format_outline(node: &Node, config: &FormatConfig) -> Result<String> {
    OutlineFormatter.format(node, config)
}

//! Human-readable views of a query result, used by the CLI.
//!
//! Neither view is XML; attribute values and content are printed as stored.

use crate::{
    error::{FormatError, Result},
    parser::Node,
};

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces per nesting level in the outline view
    pub indent_spaces: usize,
    /// Whether outline lines show the content of leaf elements
    pub show_content: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            show_content: true,
        }
    }
}

pub trait Formatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> Result<String>;
}

/// Prints a node's `content` and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFormatter;

/// One line per element, indented by depth:
/// `name [k="v" ...]: content`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineFormatter;

impl Formatter for ContentFormatter {
    fn format(&self, node: &Node, _config: &FormatConfig) -> Result<String> {
        Ok(node.content.clone())
    }
}

impl Formatter for OutlineFormatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> Result<String> {
        validate_config(config)?;

        if !node.is_element() {
            return Ok(node.content.clone());
        }

        let mut out = String::new();
        write_outline(node, 0, config, &mut out);
        Ok(out)
    }
}

fn validate_config(config: &FormatConfig) -> Result<()> {
    if config.indent_spaces > 8 {
        return Err(FormatError::InvalidIndentation(format!(
            "Indentation of {} spaces exceeds maximum allowed (8)",
            config.indent_spaces
        ))
        .into());
    }
    Ok(())
}

fn write_outline(node: &Node, depth: usize, config: &FormatConfig, out: &mut String) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&" ".repeat(depth * config.indent_spaces));
    out.push_str(&node.name);

    if !node.attributes.is_empty() {
        let attributes = node
            .attributes
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, value))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(" [");
        out.push_str(&attributes);
        out.push(']');
    }

    // the root's content repeats its children's markup, so only leaves show it
    if config.show_content && node.children.is_empty() && !node.content.is_empty() {
        out.push_str(": ");
        out.push_str(&node.content);
    }

    for child in &node.children {
        write_outline(child, depth + 1, config, out);
    }
}

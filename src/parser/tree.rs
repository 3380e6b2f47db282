//! Tree builder.
//!
//! Recursive descent over the token stream from [`Lexer`]. The first start
//! tag becomes the root; every further start tag opens a subtree that is
//! built depth-first until its matching end tag. Top-level elements and text
//! that follow the root's end tag still belong to the root.
//!
//! Content is assigned per level:
//! - every non-root node gets the concatenation of its own trimmed,
//!   non-empty text segments; its children's markup is not included;
//! - the root gets its own trimmed text segments interleaved, in document
//!   order, with `<child attrs>` + child content + `</child>` for each
//!   direct child.
//!
//! So markup only ever appears one level deep, in the root's content.

use tracing::trace;

use super::lexer::Lexer;
use super::node::Node;
use super::token::{StartTag, Token};
use crate::common::ParserState;
use crate::error::{ParseError, Result, SyntaxError};
use crate::parser::config::ParserConfig;

/// How a finished child is folded into its parent's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContentMode {
    /// Append `<child ...>` + child content + `</child>`; used for the root.
    ReconstructMarkup,
    /// Children contribute nothing; only direct text is kept.
    PlainText,
}

/// Content of one element under construction, owned by a single recursive
/// call and consumed into the finished node.
#[derive(Debug)]
pub(crate) struct ContentAccumulator {
    mode: ContentMode,
    buffer: String,
}

impl ContentAccumulator {
    pub(crate) fn new(mode: ContentMode) -> Self {
        Self {
            mode,
            buffer: String::new(),
        }
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.buffer.push_str(text);
        }
    }

    pub(crate) fn push_child(&mut self, tag: &StartTag, child: &Node) {
        if self.mode == ContentMode::ReconstructMarkup {
            tag.write_markup(&mut self.buffer);
            self.buffer.push_str(&child.content);
            self.buffer.push_str("</");
            self.buffer.push_str(&tag.name);
            self.buffer.push('>');
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn finish(self) -> String {
        self.buffer
    }
}

/// Builds a [`Node`] tree from XML text.
pub struct TreeBuilder<'a> {
    lexer: Lexer<'a>,
    state: ParserState,
    input_len: usize,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Self {
            lexer: Lexer::new(input),
            state: ParserState::with_config(config),
            input_len: input.len(),
        }
    }

    /// Consumes the whole input and returns the root element.
    ///
    /// The root stays the target of top-level tokens after its end tag:
    /// later elements become further root children and top-level text,
    /// including text before the root, joins the root's content.
    pub fn build(mut self) -> Result<Node> {
        self.state.validate_input_size(self.input_len)?;

        let mut root: Option<Node> = None;
        let mut open = false;
        let mut content = ContentAccumulator::new(ContentMode::ReconstructMarkup);

        loop {
            match self.lexer.next_token()? {
                Token::StartElement(tag) => match root.as_mut() {
                    None => {
                        self.state.enter_nested()?;
                        self.state.validate_attribute_count(tag.attributes.len())?;
                        trace!(name = %tag.name, "root");
                        root = Some(Node::from_start(&tag));
                        open = true;
                    }
                    Some(node) => {
                        let child = self.build_element(&tag, ContentMode::PlainText)?;
                        content.push_child(&tag, &child);
                        node.children.push(child);
                    }
                },
                Token::Text(text) => content.push_text(&text),
                Token::EndElement(name) => match &root {
                    Some(node) if open && name == node.name => open = false,
                    Some(node) if open => {
                        return Err(self.error(SyntaxError::MismatchedEndTag {
                            expected: node.name.clone(),
                            found: name,
                        }))
                    }
                    _ => return Err(self.error(SyntaxError::UnexpectedEndTag(name))),
                },
                Token::Eof => break,
            }
            self.state.validate_content_length(content.len())?;
        }

        let mut root = root.ok_or_else(|| self.error(SyntaxError::MissingRoot))?;
        if open {
            return Err(self.error(SyntaxError::UnclosedElement(root.name)));
        }
        self.state.exit_nested();
        root.content = content.finish();
        Ok(root)
    }

    /// Builds the element opened by `tag`, consuming tokens through its end
    /// tag.
    fn build_element(&mut self, tag: &StartTag, mode: ContentMode) -> Result<Node> {
        self.state.enter_nested()?;
        self.state.validate_attribute_count(tag.attributes.len())?;
        trace!(name = %tag.name, depth = self.state.depth(), "open");

        let mut node = Node::from_start(tag);
        let mut content = ContentAccumulator::new(mode);

        loop {
            match self.lexer.next_token()? {
                Token::StartElement(child_tag) => {
                    let child = self.build_element(&child_tag, ContentMode::PlainText)?;
                    content.push_child(&child_tag, &child);
                    node.children.push(child);
                }
                Token::Text(text) => content.push_text(&text),
                Token::EndElement(name) if name == node.name => break,
                Token::EndElement(name) => {
                    return Err(self.error(SyntaxError::MismatchedEndTag {
                        expected: node.name,
                        found: name,
                    }))
                }
                Token::Eof => return Err(self.error(SyntaxError::UnclosedElement(node.name))),
            }
            self.state.validate_content_length(content.len())?;
        }

        self.state.exit_nested();
        node.content = content.finish();
        Ok(node)
    }

    fn error(&self, err: SyntaxError) -> ParseError {
        ParseError::from(err).with_location(self.lexer.location())
    }
}

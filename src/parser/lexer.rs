use std::str;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::trace;

use super::token::{StartTag, Token};
use crate::error::{Location, ParseError, Result, SyntaxError};

/// Adapter over `quick_xml::Reader` that yields [`Token`]s.
///
/// Self-closing tags come out as a start token followed by an end token.
/// Comments, processing instructions, declarations and DOCTYPE are skipped.
pub struct Lexer<'a> {
    input: &'a str,
    reader: Reader<&'a [u8]>,
    /// Name of a self-closing element whose end token is still owed
    pending_end: Option<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut reader = Reader::from_str(input);
        let config = reader.config_mut();
        config.check_end_names = true;
        config.trim_text(false);
        Self {
            input,
            reader,
            pending_end: None,
        }
    }

    /// Byte offset of the reader in the input
    pub fn position(&self) -> usize {
        usize::try_from(self.reader.buffer_position()).unwrap_or(self.input.len())
    }

    /// Line and column of the reader in the input
    pub fn location(&self) -> Location {
        Location::from_offset(self.input, self.position())
    }

    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(name) = self.pending_end.take() {
            trace!(name = %name, "end (self-closing)");
            return Ok(Token::EndElement(name));
        }

        loop {
            let event = self
                .reader
                .read_event()
                .map_err(|e| self.error(SyntaxError::Malformed(e.to_string())))?;

            let token = match event {
                Event::Start(start) => Token::StartElement(self.start_tag(&start)?),
                Event::Empty(start) => {
                    let tag = self.start_tag(&start)?;
                    self.pending_end = Some(tag.name.clone());
                    Token::StartElement(tag)
                }
                Event::End(end) => {
                    Token::EndElement(self.decode_name(end.local_name().as_ref())?)
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| self.error(SyntaxError::InvalidText(e.to_string())))?;
                    Token::Text(text.into_owned())
                }
                Event::CData(cdata) => {
                    let text = str::from_utf8(&cdata)
                        .map_err(|e| self.error(SyntaxError::InvalidText(e.to_string())))?;
                    Token::Text(text.to_string())
                }
                Event::Eof => Token::Eof,
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => continue,
            };

            trace!(?token, "token");
            return Ok(token);
        }
    }

    fn start_tag(&self, start: &BytesStart<'_>) -> Result<StartTag> {
        let name = self.decode_name(start.local_name().as_ref())?;
        if name.is_empty() {
            return Err(self.error(SyntaxError::Malformed("empty element name".to_string())));
        }
        let mut tag = StartTag::new(name);
        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.error(SyntaxError::InvalidAttribute(e.to_string())))?;
            let key = self.decode_name(attr.key.local_name().as_ref())?;
            let value = attr
                .unescape_value()
                .map_err(|e| self.error(SyntaxError::InvalidAttribute(format!("{}: {}", key, e))))?;
            tag.attributes.push((key, value.into_owned()));
        }
        Ok(tag)
    }

    fn decode_name(&self, raw: &[u8]) -> Result<String> {
        str::from_utf8(raw)
            .map(String::from)
            .map_err(|e| self.error(SyntaxError::Malformed(e.to_string())))
    }

    fn error(&self, err: SyntaxError) -> ParseError {
        ParseError::from(err).with_location(self.location())
    }
}

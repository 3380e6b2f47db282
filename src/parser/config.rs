use std::fmt;

use crate::error::{Result, SecurityError};

/// Maximum element nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Maximum input size (10MB)
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024;
/// Maximum length of a single node's content (1MB)
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 1024 * 1024;
/// Maximum number of attributes on one start tag
pub const DEFAULT_MAX_ATTRIBUTES: usize = 256;

/// Configuration for parser limits and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum element nesting depth, the root counting as depth 1
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
    /// Maximum length of any node's accumulated content
    pub max_content_length: usize,
    /// Maximum number of attributes per element
    pub max_attributes: usize,
}

/// Tracks nesting depth during parsing
#[derive(Debug, Default)]
pub struct ParsingContext {
    current_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            max_attributes: DEFAULT_MAX_ATTRIBUTES,
        }
    }
}

impl fmt::Display for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParserConfig {{ max_depth: {}, max_size: {}, max_content_length: {}, max_attributes: {} }}",
            self.max_depth, self.max_size, self.max_content_length, self.max_attributes
        )
    }
}

impl ParserConfig {
    pub fn validate_input_size(&self, size: usize) -> Result<()> {
        if size > self.max_size {
            return Err(SecurityError::MaxSizeExceeded(self.max_size).into());
        }
        Ok(())
    }

    pub fn validate_content_length(&self, length: usize) -> Result<()> {
        if length > self.max_content_length {
            return Err(SecurityError::MaxContentLengthExceeded(self.max_content_length).into());
        }
        Ok(())
    }

    pub fn validate_attribute_count(&self, count: usize) -> Result<()> {
        if count > self.max_attributes {
            return Err(SecurityError::MaxAttributesExceeded(self.max_attributes).into());
        }
        Ok(())
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.current_depth
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<()> {
        self.current_depth += 1;
        if self.current_depth > config.max_depth {
            return Err(SecurityError::MaxDepthExceeded(config.max_depth).into());
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        if self.current_depth > 0 {
            self.current_depth -= 1;
        }
    }
}

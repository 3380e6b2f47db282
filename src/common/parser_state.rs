use crate::error::Result;
use crate::parser::config::{ParserConfig, ParsingContext};

/// Limits plus the running depth counter, threaded through one parse.
#[derive(Debug, Default)]
pub struct ParserState {
    pub config: ParserConfig,
    pub context: ParsingContext,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            context: ParsingContext::new(),
        }
    }

    pub fn enter_nested(&mut self) -> Result<()> {
        self.context.enter_nested(&self.config)
    }

    pub fn exit_nested(&mut self) {
        self.context.exit_nested()
    }

    pub fn depth(&self) -> usize {
        self.context.depth()
    }

    pub fn validate_input_size(&self, size: usize) -> Result<()> {
        self.config.validate_input_size(size)
    }

    pub fn validate_content_length(&self, length: usize) -> Result<()> {
        self.config.validate_content_length(length)
    }

    pub fn validate_attribute_count(&self, count: usize) -> Result<()> {
        self.config.validate_attribute_count(count)
    }
}

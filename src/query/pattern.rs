use std::fmt;

/// A pattern split into raw steps.
///
/// Splitting does no validation; each step is classified by
/// [`Step::classify`] only when the resolver reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    steps: Vec<String>,
}

/// One classified pattern step, borrowing from the raw step text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Match the first child with this name
    Name(&'a str),
    /// Select a child by position; holds the text between the brackets
    Index(&'a str),
    /// Look up an attribute; holds the text after `@`
    Attribute(&'a str),
}

impl Pattern {
    /// Strips one leading and one trailing `/`, then splits on `/`.
    ///
    /// The empty pattern yields a single empty step.
    pub fn parse(pattern: &str) -> Self {
        let trimmed = pattern.strip_prefix('/').unwrap_or(pattern);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        Self {
            steps: trimmed.split('/').map(str::to_string).collect(),
        }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl From<&str> for Pattern {
    fn from(pattern: &str) -> Self {
        Self::parse(pattern)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.steps.join("/"))
    }
}

impl<'a> Step<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if let Some(name) = raw.strip_prefix('@') {
            return Self::Attribute(name);
        }
        match raw.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            Some(index) => Self::Index(index),
            None => Self::Name(raw),
        }
    }
}

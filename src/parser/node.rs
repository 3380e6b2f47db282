use indexmap::IndexMap;
use tracing::debug;

use super::token::StartTag;
use crate::error::{QueryError, QueryResult};
use crate::query::{self, Pattern};

/// A parsed element.
///
/// `content` is the trimmed text of a leaf. For the root it is the
/// reconstructed markup of its children interleaved with its own text; see
/// [`TreeBuilder`](crate::parser::TreeBuilder) for the exact rule.
///
/// The zero value (`Node::default()`) doubles as the failure sentinel of the
/// convenience entry points, and a node with only `content` set is the
/// scalar result of an attribute step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub content: String,
    pub children: Vec<Node>,
}

impl Node {
    /// A nameless node carrying only a value.
    pub fn scalar(value: impl Into<String>) -> Self {
        Self {
            content: value.into(),
            ..Self::default()
        }
    }

    pub(crate) fn from_start(tag: &StartTag) -> Self {
        Self {
            name: tag.name.clone(),
            attributes: tag.attributes.iter().cloned().collect(),
            ..Self::default()
        }
    }

    /// True for an element, false for the zero node and for scalar results.
    pub fn is_element(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.name.is_empty()
            && self.attributes.is_empty()
            && self.content.is_empty()
            && self.children.is_empty()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First child with the given name
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Resolves `pattern` against this node, reporting why it failed.
    ///
    /// Fails with [`QueryError::EmptyTree`] when called on a nameless node.
    pub fn query(&self, pattern: &str) -> QueryResult<Self> {
        if !self.is_element() {
            return Err(QueryError::EmptyTree);
        }
        let pattern = Pattern::parse(pattern);
        query::resolve(self, &pattern).map(|found| found.into_owned())
    }

    /// Resolves `pattern` against this node, returning the zero node on any
    /// failure. Use [`Node::query`] when the reason matters.
    pub fn find(&self, pattern: &str) -> Self {
        self.query(pattern).unwrap_or_else(|err| {
            debug!(pattern, error = %err, "query failed");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        let mut root = Node::from_start(&StartTag::new("a").with_attribute("x", "1"));
        root.children.push(Node {
            name: "b".to_string(),
            content: "hi".to_string(),
            ..Node::default()
        });
        root.children.push(Node::from_start(&StartTag::new("c")));
        root
    }

    #[test]
    fn test_accessors() {
        let root = sample();
        assert_eq!(root.attribute("x"), Some("1"));
        assert_eq!(root.attribute("y"), None);
        assert_eq!(root.child("c").map(|c| c.name.as_str()), Some("c"));
        assert!(root.child("z").is_none());
    }

    #[test]
    fn test_scalar_is_not_an_element() {
        let scalar = Node::scalar("1");
        assert!(!scalar.is_element());
        assert!(!scalar.is_zero());
        assert!(Node::default().is_zero());
    }

    #[test]
    fn test_find_swallows_errors() {
        let root = sample();
        assert_eq!(root.find("z"), Node::default());
        assert_eq!(
            root.query("z"),
            Err(QueryError::TagNotFound("z".to_string()))
        );
    }

    #[test]
    fn test_zero_node_cannot_be_queried() {
        assert_eq!(Node::default().query("a"), Err(QueryError::EmptyTree));
        assert_eq!(Node::scalar("v").query(""), Err(QueryError::EmptyTree));
    }
}

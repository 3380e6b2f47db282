use std::borrow::Cow;

use super::pattern::{Pattern, Step};
use crate::error::{QueryError, QueryResult};
use crate::parser::Node;

/// Walks `pattern` from `root`.
///
/// Element matches borrow from the tree; an attribute step produces an owned
/// scalar node and any remaining steps are applied to that scalar.
pub fn resolve<'a>(root: &'a Node, pattern: &Pattern) -> QueryResult<Cow<'a, Node>> {
    resolve_steps(root, pattern.steps())
}

fn resolve_steps<'a>(node: &'a Node, steps: &[String]) -> QueryResult<Cow<'a, Node>> {
    let Some((step, rest)) = steps.split_first() else {
        return Ok(Cow::Borrowed(node));
    };

    match Step::classify(step) {
        Step::Attribute(name) => {
            let value = node
                .attributes
                .get(name)
                .ok_or_else(|| QueryError::AttributeNotFound(name.to_string()))?;
            let scalar = Node::scalar(value.as_str());
            let found = resolve_steps(&scalar, rest)?.into_owned();
            Ok(Cow::Owned(found))
        }
        Step::Index(text) => {
            let index: i64 = text
                .parse()
                .map_err(|_| QueryError::InvalidIndex(text.to_string()))?;
            let child = usize::try_from(index)
                .ok()
                .and_then(|i| node.children.get(i))
                .ok_or(QueryError::IndexOutOfRange(index))?;
            resolve_steps(child, rest)
        }
        // a trailing empty step, as in "a//" or "", stops on the current node
        Step::Name("") if rest.is_empty() => Ok(Cow::Borrowed(node)),
        Step::Name(name) => {
            let child = node
                .children
                .iter()
                .find(|child| child.name == name)
                .ok_or_else(|| QueryError::TagNotFound(name.to_string()))?;
            resolve_steps(child, rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::StartTag;

    fn leaf(name: &str, content: &str) -> Node {
        Node {
            name: name.to_string(),
            content: content.to_string(),
            ..Node::default()
        }
    }

    fn tree() -> Node {
        let mut root = Node::from_start(&StartTag::new("a").with_attribute("x", "1"));
        let mut b = leaf("b", "first");
        b.children.push(leaf("d", "deep"));
        root.children.push(b);
        root.children.push(leaf("b", "second"));
        root.children.push(leaf("c", ""));
        root
    }

    fn run<'a>(root: &'a Node, pattern: &str) -> QueryResult<Cow<'a, Node>> {
        resolve(root, &Pattern::parse(pattern))
    }

    #[test]
    fn test_name_step_takes_first_match() {
        let root = tree();
        assert_eq!(run(&root, "b").unwrap().content, "first");
        assert_eq!(run(&root, "b/d").unwrap().content, "deep");
    }

    #[test]
    fn test_element_results_borrow_from_tree() {
        let root = tree();
        assert!(matches!(run(&root, "[1]").unwrap(), Cow::Borrowed(_)));
        assert!(matches!(run(&root, "@x").unwrap(), Cow::Owned(_)));
    }

    #[test]
    fn test_index_step() {
        let root = tree();
        assert_eq!(run(&root, "[1]").unwrap().content, "second");
        assert_eq!(run(&root, "[+2]").unwrap().name, "c");
        assert_eq!(run(&root, "[3]"), Err(QueryError::IndexOutOfRange(3)));
        assert_eq!(run(&root, "[-1]"), Err(QueryError::IndexOutOfRange(-1)));
        assert_eq!(
            run(&root, "[one]"),
            Err(QueryError::InvalidIndex("one".to_string()))
        );
        assert_eq!(
            run(&root, "[99999999999999999999]"),
            Err(QueryError::InvalidIndex("99999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_attribute_step() {
        let root = tree();
        assert_eq!(run(&root, "@x").unwrap().into_owned(), Node::scalar("1"));
        assert_eq!(
            run(&root, "@y"),
            Err(QueryError::AttributeNotFound("y".to_string()))
        );
        assert_eq!(
            run(&root, "@x/b"),
            Err(QueryError::TagNotFound("b".to_string()))
        );
        assert_eq!(run(&root, "@x//").unwrap().content, "1");
    }

    #[test]
    fn test_empty_steps() {
        let root = tree();
        assert_eq!(run(&root, "").unwrap().name, "a");
        assert_eq!(run(&root, "/").unwrap().name, "a");
        assert_eq!(run(&root, "b//").unwrap().content, "first");
        assert_eq!(
            run(&root, "b//d"),
            Err(QueryError::TagNotFound(String::new()))
        );
    }
}

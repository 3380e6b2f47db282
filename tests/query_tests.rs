#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

#[cfg(test)]
mod query_tests {
    use std::borrow::Cow;
    use std::thread;

    use xmlpath::test_utils::*;

    fn sample() -> Node {
        parse(SAMPLE_DOCUMENT)
    }

    fn catalog() -> Node {
        let data = TestData::load().unwrap();
        try_parse(&data.catalog_xml).unwrap()
    }

    #[test]
    fn test_name_step() {
        let found = sample().find("b");
        assert_eq!(found.name, "b");
        assert_eq!(found.content, "hi");
    }

    #[test]
    fn test_attribute_step_yields_scalar() {
        let found = sample().find("@x");
        assert_eq!(found.content, "1");
        assert_eq!(found.name, "");
        assert!(found.attributes.is_empty());
        assert!(found.children.is_empty());
    }

    #[test]
    fn test_index_step() {
        assert_eq!(sample().find("[1]").name, "c");
        assert_eq!(sample().find("[0]").content, "hi");
    }

    #[test]
    fn test_missing_tag() {
        let root = sample();
        assert_eq!(
            root.query("z"),
            Err(QueryError::TagNotFound("z".to_string()))
        );
        assert!(root.find("z").is_zero());
    }

    #[test]
    fn test_index_out_of_range() {
        let root = sample();
        assert_eq!(root.query("[5]"), Err(QueryError::IndexOutOfRange(5)));
        assert!(root.find("[5]").is_zero());
    }

    #[test]
    fn test_invalid_index_and_missing_attribute() {
        let root = sample();
        assert_eq!(
            root.query("[first]"),
            Err(QueryError::InvalidIndex("first".to_string()))
        );
        assert_eq!(
            root.query("@nope"),
            Err(QueryError::AttributeNotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_surrounding_slashes_are_optional() {
        let root = sample();
        for pattern in ["b", "/b", "b/", "/b/"] {
            assert_eq!(root.find(pattern).content, "hi", "pattern {}", pattern);
        }
    }

    #[test]
    fn test_empty_pattern_returns_root() {
        let root = sample();
        assert_eq!(root.query(""), Ok(root.clone()));
        assert_eq!(root.query("/"), Ok(root.clone()));
    }

    #[test]
    fn test_steps_after_attribute_fail() {
        let root = sample();
        assert_eq!(
            root.query("@x/b"),
            Err(QueryError::TagNotFound("b".to_string()))
        );
        assert_eq!(
            root.query("@x/[0]"),
            Err(QueryError::IndexOutOfRange(0))
        );
    }

    #[test]
    fn test_failed_parse_cannot_be_queried() {
        let root = parse("<broken>");
        assert_eq!(root.query("anything"), Err(QueryError::EmptyTree));
        assert!(root.find("").is_zero());
    }

    #[test]
    fn test_catalog_paths() {
        let root = catalog();
        assert_eq!(root.find("book/title").content, "XML Developer's Guide");
        assert_eq!(root.find("[1]/title").content, "Midnight Rain");
        assert_eq!(root.find("[1]/@id").content, "bk102");
        assert_eq!(root.find("book/price/@currency").content, "USD");
        assert_eq!(root.find("[1]/[2]/@currency").content, "EUR");
        assert_eq!(root.find("[1]/note").content, "Signed & numbered");
        assert_eq!(root.find("magazine").content, "Monthlyedition");
        assert_eq!(root.find("magazine/issue/@number").content, "12");
        assert_eq!(root.find("@name").content, "Main Street Books");
        assert_eq!(root.find("@bk").content, "urn:books");
        assert_eq!(
            root.find("book/description").content,
            "An in-depth look at creating applications\n            with XML."
        );
        assert_eq!(root.find("empty").name, "empty");
    }

    #[test]
    fn test_first_match_without_backtracking() {
        // the first <book> has no <note>, and the resolver does not try the second
        let root = catalog();
        assert_eq!(
            root.query("book/note"),
            Err(QueryError::TagNotFound("note".to_string()))
        );
    }

    #[test]
    fn test_resolve_borrows_elements() {
        let root = sample();
        let found = resolve(&root, &Pattern::parse("b")).unwrap();
        assert!(matches!(found, Cow::Borrowed(_)));
        assert!(std::ptr::eq(found.as_ref(), &root.children[0]));
    }

    #[test]
    fn test_resolve_does_not_check_root_name() {
        let scalar = Node::scalar("v");
        let found = resolve(&scalar, &Pattern::parse("")).unwrap();
        assert_eq!(found.content, "v");
    }

    #[test]
    fn test_repeated_queries_are_equal() {
        let root = catalog();
        let before = root.clone();
        for pattern in ["book", "[2]/issue", "@name", "missing", "[9]"] {
            let first = root.query(pattern);
            let second = root.query(pattern);
            assert_eq!(first, second, "pattern {}", pattern);
        }
        assert_eq!(root, before);
    }

    #[test]
    fn test_concurrent_readers() {
        let root = catalog();
        thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let root = &root;
                    scope.spawn(move || root.find(&format!("[{}]", i % 2)).find("@id").content)
                })
                .collect();
            let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(ids, ["bk101", "bk102", "bk101", "bk102"]);
        });
    }
}

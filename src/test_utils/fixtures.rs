pub const TEST_FILES: [&str; 2] = ["tests/input/small.xml", "tests/input/catalog.xml"];

/// The document used throughout the examples: root `a` with `x="1"`, a text
/// child `b` and an empty child `c`.
pub const SAMPLE_DOCUMENT: &str = r#"<a x="1"><b>hi</b><c/></a>"#;

pub const INVALID_XML_SAMPLES: [(&str, &str); 7] = [
    ("", "Empty input"),
    ("   \n\t", "Whitespace only"),
    ("<a>", "Unclosed root"),
    ("<a><b></a>", "Mismatched end tag"),
    ("<a><b>text</a></b>", "Crossed nesting"),
    ("<a/></b>", "Stray closing tag"),
    (r#"<a x="1" x="2"/>"#, "Duplicate attribute"),
];

mod data;
mod fixtures;
mod helpers;

pub use data::{read_test_file, TestData};
pub use fixtures::{INVALID_XML_SAMPLES, SAMPLE_DOCUMENT, TEST_FILES};
pub use helpers::{nested_document, tmp_file_path, wide_document};

// Re-export common test types
pub use crate::{
    error::{
        FormatError, IOError, ParseError, ParseErrorKind, QueryError, QueryResult, Result,
        SecurityError, SyntaxError,
    },
    formatter::{ContentFormatter, FormatConfig, Formatter, OutlineFormatter},
    parse, parse_file, parse_with_config,
    parser::{
        config::{
            ParserConfig, DEFAULT_MAX_ATTRIBUTES, DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_MAX_DEPTH,
            DEFAULT_MAX_SIZE,
        },
        Node, TreeBuilder,
    },
    query::{resolve, Pattern, Step},
    try_parse,
    utils::{format_content, format_outline, parse_xml, query_node, read_file, write_file},
};
